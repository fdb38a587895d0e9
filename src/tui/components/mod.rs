//! # TUI Components
//!
//! The pieces of the calculator screen.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: App name, status message, blank-input notice, busy spinner
//! - `ResultCard`: Latest result tinted with the category color
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputField`: Numeric single-line input (used twice: height, weight)
//!
//! Components receive external data as props rather than reaching into
//! `App`, so each one can be rendered against a `TestBackend` in isolation.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── input_field.rs   (Height / weight inputs)
//! └── result_card.rs   (Colored result card)
//! ```

pub mod input_field;
pub mod result_card;
mod title_bar;

pub use input_field::{FieldEvent, InputField};
pub use result_card::ResultCard;
pub use title_bar::TitleBar;
