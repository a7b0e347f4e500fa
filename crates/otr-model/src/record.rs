use serde::{Deserialize, Serialize};

/// One row of the price dataset.
///
/// `price_otr` is `None` when the source cell was empty or could not be
/// parsed as a finite number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub model_series: String,
    pub variant: String,
    pub location: String,
    pub price_otr: Option<f64>,
}

impl PriceRecord {
    pub fn new(
        model_series: impl Into<String>,
        variant: impl Into<String>,
        location: impl Into<String>,
        price_otr: Option<f64>,
    ) -> Self {
        Self {
            model_series: model_series.into(),
            variant: variant.into(),
            location: location.into(),
            price_otr,
        }
    }

    /// True when all three key fields equal the given values exactly.
    pub fn matches(&self, model_series: &str, variant: &str, location: &str) -> bool {
        self.model_series == model_series && self.variant == variant && self.location == location
    }

    pub fn key(&self) -> PriceKey<'_> {
        PriceKey {
            model_series: &self.model_series,
            variant: &self.variant,
            location: &self.location,
        }
    }
}

/// Borrowed (model series, variant, location) triple identifying a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PriceKey<'a> {
    pub model_series: &'a str,
    pub variant: &'a str,
    pub location: &'a str,
}
