//! # Application State
//!
//! The state-holder for the calculator screen. Domain data only, no
//! TUI-specific types; presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── result: Observable<Option<BmiResult>>   // latest result, None after reset
//! ├── is_loading: Observable<bool>            // busy flag for spinners
//! ├── status_message: String                  // status bar text
//! └── decimal_places: usize                   // how BMI is displayed
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Consumers read with `get()` or `subscribe()`; they never mutate directly.

use log::{debug, info};

use crate::core::bmi::{self, BmiResult};
use crate::core::config::ResolvedConfig;
use crate::core::observable::Observable;

pub const DEFAULT_DECIMAL_PLACES: usize = 1;

#[derive(Debug)]
pub struct App {
    pub result: Observable<Option<BmiResult>>,
    pub is_loading: Observable<bool>,
    pub status_message: String,
    pub decimal_places: usize,
    pub show_message: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            result: Observable::new(None),
            is_loading: Observable::new(false),
            status_message: String::from("Ready"),
            decimal_places: DEFAULT_DECIMAL_PLACES,
            show_message: true,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            decimal_places: config.decimal_places,
            show_message: config.show_message,
            ..Self::new()
        }
    }

    /// Latest published result, if any.
    pub fn current(&self) -> Option<&BmiResult> {
        self.result.get().as_ref()
    }

    /// Validate the raw inputs and publish a new result on success.
    ///
    /// Invalid input is swallowed: the previous result stays in place and
    /// nothing is returned to the caller. The busy flag goes true→false once
    /// for every call that gets past the blank check.
    pub(crate) fn calculate(&mut self, height: &str, weight: &str) {
        if bmi::is_blank(height, weight) {
            debug!("Calculation skipped: blank input");
            return;
        }

        self.is_loading.set(true);
        let outcome = bmi::evaluate(height, weight);
        self.is_loading.set(false);

        match outcome {
            Ok(result) => {
                info!(
                    "BMI {:.2} ({}) from height={:?} weight={:?}",
                    result.bmi, result.category, height, weight
                );
                self.status_message = format!(
                    "BMI {} ({})",
                    result.format_bmi(self.decimal_places),
                    result.category
                );
                self.result.set(Some(result));
            }
            Err(e) => {
                debug!("Calculation rejected: {}", e);
            }
        }
    }

    /// Clear the current result. Idempotent.
    pub(crate) fn reset(&mut self) {
        if self.result.get().is_some() {
            debug!("Result cleared");
        }
        self.result.set(None);
        self.status_message = String::from("Cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::category::BmiCategory;
    use crate::test_support::calculated_app;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert!(app.current().is_none());
        assert!(!*app.is_loading.get());
        assert_eq!(app.status_message, "Ready");
        assert_eq!(app.decimal_places, 1);
    }

    #[test]
    fn test_calculate_publishes_result() {
        let app = calculated_app("170", "65");
        let result = app.current().unwrap();
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(app.status_message, "BMI 22.5 (NORMAL)");
    }

    #[test]
    fn test_failed_calculation_keeps_previous_result() {
        let mut app = calculated_app("170", "65");
        app.calculate("abc", "65");
        assert_eq!(app.current().unwrap().category, BmiCategory::Normal);
        app.calculate("170", "0");
        assert_eq!(app.current().unwrap().category, BmiCategory::Normal);
    }

    #[test]
    fn test_busy_flag_toggles_once_on_parse_failure() {
        let mut app = App::new();
        let busy = app.is_loading.subscribe();
        app.calculate("invalid", "65");
        assert_eq!(busy.try_iter().collect::<Vec<_>>(), vec![true, false]);
        assert!(!*app.is_loading.get());
    }

    #[test]
    fn test_busy_flag_untouched_on_blank_input() {
        let mut app = App::new();
        let busy = app.is_loading.subscribe();
        app.calculate("", "65");
        app.calculate("170", "   ");
        assert!(busy.try_recv().is_err());
    }

    #[test]
    fn test_result_subscriber_sees_replacement_and_reset() {
        let mut app = App::new();
        let results = app.result.subscribe();
        app.calculate("170", "50");
        app.calculate("170", "100");
        app.reset();

        let seen: Vec<_> = results
            .try_iter()
            .map(|r| r.map(|r| r.category))
            .collect();
        assert_eq!(
            seen,
            vec![Some(BmiCategory::Underweight), Some(BmiCategory::Obese), None]
        );
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut app = calculated_app("170", "65");
        app.reset();
        assert!(app.current().is_none());
        app.reset();
        assert!(app.current().is_none());
    }

    #[test]
    fn test_status_uses_decimal_places() {
        let mut app = App::new();
        app.decimal_places = 2;
        app.calculate("170", "65");
        assert_eq!(app.status_message, "BMI 22.49 (NORMAL)");
    }
}
