use std::fmt;

use serde::{Deserialize, Serialize};

/// The four keys selecting one configuration in two locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    pub model_series: String,
    pub variant: String,
    pub location_a: String,
    pub location_b: String,
}

impl ComparisonRequest {
    pub fn new(
        model_series: impl Into<String>,
        variant: impl Into<String>,
        location_a: impl Into<String>,
        location_b: impl Into<String>,
    ) -> Self {
        Self {
            model_series: model_series.into(),
            variant: variant.into(),
            location_a: location_a.into(),
            location_b: location_b.into(),
        }
    }
}

/// Relative difference of price B against price A, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentageDifference {
    /// A finite percentage (exactly `0.0` when both prices are zero).
    Value(f64),
    /// Price A is zero while price B is not.
    Undefined,
}

impl PercentageDifference {
    /// Applies the zero-price policy to a pair of prices.
    pub fn between(price_a: f64, price_b: f64) -> Self {
        if price_a != 0.0 {
            Self::Value((price_b - price_a) / price_a * 100.0)
        } else if price_b != 0.0 {
            Self::Undefined
        } else {
            Self::Value(0.0)
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(value),
            Self::Undefined => None,
        }
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl fmt::Display for PercentageDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value:.2}%"),
            Self::Undefined => f.write_str("not defined"),
        }
    }
}

/// Outcome of comparing one configuration across two locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub model_series: String,
    pub variant: String,
    pub location_a: String,
    pub price_a: f64,
    pub location_b: String,
    pub price_b: f64,
    pub absolute_difference: f64,
    pub percentage_difference: PercentageDifference,
}

impl ComparisonResult {
    /// Signed difference `price_b - price_a`.
    pub fn signed_difference(&self) -> f64 {
        self.price_b - self.price_a
    }
}
