//! # Core Application Logic
//!
//! This module contains the calculator's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • category (lookup)    │
//!                    │  • bmi (validation)     │
//!                    │  • App (state-holder)   │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Config is the   │
//!                    │  only file access.      │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │  One-shot  │
//!            │  Adapter   │            │    CLI     │
//!            │ (ratatui)  │            │  (main.rs) │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`category`]: `BmiCategory` and its message/color table
//! - [`bmi`]: input parsing, the formula, `BmiResult`, `InputError`
//! - [`observable`]: latest-value holder with mpsc subscribers
//! - [`state`]: The `App` struct, the single state-holder
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: TOML config and override resolution

pub mod action;
pub mod bmi;
pub mod category;
pub mod config;
pub mod observable;
pub mod state;

// Re-export commonly used types for convenience
pub use bmi::{BmiResult, InputError};
pub use category::{BmiCategory, ColorToken};
