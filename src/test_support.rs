//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, update};
use crate::core::state::App;

/// Creates an App that has already run one calculation.
pub fn calculated_app(height: &str, weight: &str) -> App {
    let mut app = App::new();
    update(
        &mut app,
        Action::Calculate {
            height: height.to_string(),
            weight: weight.to_string(),
        },
    );
    app
}

/// Collects everything a `TestBackend` rendered into one string.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
