//! # BMI Categories
//!
//! The four weight-classification buckets and their static associations.
//!
//! ```text
//!        18.5          25           30
//! ──────────┼───────────┼────────────┼──────────▶ bmi
//! Underweight   Normal    Overweight    Obese
//! ```
//!
//! Boundaries are half-open: a value sitting exactly on a boundary belongs to
//! the bucket on its right.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound (exclusive) of `Underweight`.
pub const UNDERWEIGHT_LIMIT: f64 = 18.5;
/// Upper bound (exclusive) of `Normal`.
pub const NORMAL_LIMIT: f64 = 25.0;
/// Upper bound (exclusive) of `Overweight`.
pub const OVERWEIGHT_LIMIT: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// Display color associated with a category.
///
/// The core only hands out tokens; each presentation adapter decides what
/// an actual color looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Blue,
    Green,
    Orange,
    Red,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// Pick the bucket for a BMI value.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_LIMIT {
            BmiCategory::Underweight
        } else if bmi < NORMAL_LIMIT {
            BmiCategory::Normal
        } else if bmi < OVERWEIGHT_LIMIT {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Advisory text shown next to the result.
    pub fn message(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "You are underweight. Consider consulting a nutritionist.",
            BmiCategory::Normal => "Your weight is normal. Keep maintaining a healthy lifestyle!",
            BmiCategory::Overweight => "You are overweight. Consider starting a fitness routine.",
            BmiCategory::Obese => {
                "You are in the obese category. Please consult a healthcare provider."
            }
        }
    }

    pub fn color(self) -> ColorToken {
        match self {
            BmiCategory::Underweight => ColorToken::Blue,
            BmiCategory::Normal => ColorToken::Green,
            BmiCategory::Overweight => ColorToken::Orange,
            BmiCategory::Obese => ColorToken::Red,
        }
    }

    /// Upper-case name, as shown on the result card (`Category: NORMAL`).
    pub fn name(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "UNDERWEIGHT",
            BmiCategory::Normal => "NORMAL",
            BmiCategory::Overweight => "OVERWEIGHT",
            BmiCategory::Obese => "OBESE",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_belong_to_upper_bucket() {
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_values_just_below_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.499), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(24.999), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(29.999), BmiCategory::Overweight);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(BmiCategory::from_bmi(0.01), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(250.0), BmiCategory::Obese);
    }

    #[test]
    fn test_colors_are_distinct() {
        let colors: std::collections::HashSet<_> =
            BmiCategory::ALL.iter().map(|c| c.color()).collect();
        assert_eq!(colors.len(), 4);
        assert_eq!(BmiCategory::Normal.color(), ColorToken::Green);
        assert_eq!(BmiCategory::Obese.color(), ColorToken::Red);
    }

    #[test]
    fn test_messages() {
        assert!(BmiCategory::Underweight.message().contains("nutritionist"));
        assert!(BmiCategory::Normal.message().contains("healthy lifestyle"));
        assert!(BmiCategory::Overweight.message().contains("fitness routine"));
        assert!(BmiCategory::Obese.message().contains("healthcare provider"));
    }

    #[test]
    fn test_serde_names_match_display() {
        for category in BmiCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }
}
