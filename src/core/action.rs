//! # Actions
//!
//! Everything that can happen on the calculator screen becomes an `Action`.
//! User presses Enter? That's `Action::Calculate { height, weight }`.
//! User presses Ctrl+R? That's `Action::Reset`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and tells the caller what to do next via an `Effect`. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Calculate { height: String, weight: String },
    Reset,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Calculate { height, weight } => {
            app.calculate(&height, &weight);
            Effect::None
        }
        Action::Reset => {
            app.reset();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
