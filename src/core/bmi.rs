//! # BMI Calculation
//!
//! Input validation and the formula itself. Everything here is pure:
//! no state, no logging, no I/O.
//!
//! ```text
//! "170", "65"
//!     │ evaluate()
//!     ├─ blank?          → InputError::Blank
//!     ├─ parse_measurement()
//!     │     ├─ not f64   → InputError::NotANumber
//!     │     └─ <= 0      → InputError::NonPositive
//!     └─ compute()       → BmiResult { 22.49, Normal, "..." }
//! ```

use serde::Serialize;
use std::fmt;

use super::category::{BmiCategory, ColorToken};

/// Which input a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Height,
    Weight,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Height => "height",
            Field::Weight => "weight",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
    pub message: String,
}

impl BmiResult {
    /// Build a result from an already validated BMI value.
    fn classify(bmi: f64) -> Self {
        let category = BmiCategory::from_bmi(bmi);
        Self {
            bmi,
            category,
            message: category.message().to_string(),
        }
    }

    pub fn color(&self) -> ColorToken {
        self.category.color()
    }

    /// BMI rounded to `decimal_places`, e.g. `"22.5"` for 1.
    pub fn format_bmi(&self, decimal_places: usize) -> String {
        format!("{:.*}", decimal_places, self.bmi)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    Blank { field: Field },
    NotANumber { field: Field, input: String },
    NonPositive { field: Field, value: f64 },
    /// Infinite or NaN input, or a BMI that overflowed.
    NotFinite,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Blank { field } => write!(f, "{} is empty", field.label()),
            InputError::NotANumber { field, input } => {
                write!(f, "{} is not a number: {:?}", field.label(), input)
            }
            InputError::NonPositive { field, value } => {
                write!(f, "{} must be greater than zero (got {})", field.label(), value)
            }
            InputError::NotFinite => write!(f, "input is out of range"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse one raw measurement. Surrounding whitespace is ignored.
pub fn parse_measurement(field: Field, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Blank { field });
    }

    let value: f64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        field,
        input: trimmed.to_string(),
    })?;

    if !value.is_finite() {
        return Err(InputError::NotFinite);
    }
    if value <= 0.0 {
        return Err(InputError::NonPositive { field, value });
    }
    Ok(value)
}

/// Apply the formula to validated numbers.
///
/// `bmi = weight_kg / (height_m * height_m)` with `height_m = height_cm / 100`.
pub fn compute(height_cm: f64, weight_kg: f64) -> Result<BmiResult, InputError> {
    for (field, value) in [(Field::Height, height_cm), (Field::Weight, weight_kg)] {
        if !value.is_finite() {
            return Err(InputError::NotFinite);
        }
        if value <= 0.0 {
            return Err(InputError::NonPositive { field, value });
        }
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);

    // Tiny heights can overflow to infinity, huge ones underflow to zero.
    if !bmi.is_finite() || bmi <= 0.0 {
        return Err(InputError::NotFinite);
    }

    Ok(BmiResult::classify(bmi))
}

/// Returns true when either raw input is empty or whitespace only.
pub fn is_blank(height: &str, weight: &str) -> bool {
    height.trim().is_empty() || weight.trim().is_empty()
}

/// Blank check, parse and compute in one go.
pub fn evaluate(height: &str, weight: &str) -> Result<BmiResult, InputError> {
    let height_cm = parse_measurement(Field::Height, height)?;
    let weight_kg = parse_measurement(Field::Weight, weight)?;
    compute(height_cm, weight_kg)
}
