//! The four user-chosen comparison keys.
//!
//! A [`Selection`] is rebuilt for every request. Unset keys fall back to
//! fixed defaults; every key is checked against the dataset indexes before a
//! request is produced.

use thiserror::Error;

use otr_model::ComparisonRequest;

use crate::dataset::PriceDataset;

/// Preferred default for the first location.
pub const DEFAULT_LOCATION_A: &str = "DKI";

/// Preferred default for the second location.
pub const DEFAULT_LOCATION_B: &str = "Jawa Barat";

/// A key chosen by the user that the dataset does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("the price dataset has no model series or locations")]
    EmptyDataset,

    #[error("unknown model series '{model_series}'")]
    UnknownModel { model_series: String },

    #[error("variant '{variant}' is not offered for model series '{model_series}'")]
    UnknownVariant {
        model_series: String,
        variant: String,
    },

    #[error("unknown location '{location}'")]
    UnknownLocation { location: String },
}

/// Partially chosen comparison keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub model_series: Option<String>,
    pub variant: Option<String>,
    pub location_a: Option<String>,
    pub location_b: Option<String>,
}

impl Selection {
    #[must_use]
    pub fn with_model(mut self, model_series: impl Into<String>) -> Self {
        self.model_series = Some(model_series.into());
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    #[must_use]
    pub fn with_locations(
        mut self,
        location_a: impl Into<String>,
        location_b: impl Into<String>,
    ) -> Self {
        self.location_a = Some(location_a.into());
        self.location_b = Some(location_b.into());
        self
    }

    /// Fills unset keys with defaults and validates all four against the
    /// dataset indexes.
    ///
    /// Defaults: the first model series, its first variant, `DKI` (else the
    /// first location) and `Jawa Barat` (else the second location, or the
    /// first when only one exists).
    pub fn resolve(&self, dataset: &PriceDataset) -> Result<ComparisonRequest, SelectionError> {
        let variants = dataset.variants();
        let locations = dataset.locations();

        let model_series = match &self.model_series {
            Some(model) => model.clone(),
            None => variants
                .first_model()
                .ok_or(SelectionError::EmptyDataset)?
                .to_string(),
        };
        let Some(model_variants) = variants.variants(&model_series) else {
            return Err(SelectionError::UnknownModel { model_series });
        };

        let variant = match &self.variant {
            Some(variant) if model_variants.contains(variant) => variant.clone(),
            Some(variant) => {
                return Err(SelectionError::UnknownVariant {
                    model_series,
                    variant: variant.clone(),
                });
            }
            None => model_variants
                .first()
                .cloned()
                .ok_or(SelectionError::EmptyDataset)?,
        };

        let location_a = match &self.location_a {
            Some(location) => location.clone(),
            None => default_location(dataset, DEFAULT_LOCATION_A, 0)?,
        };
        let location_b = match &self.location_b {
            Some(location) => location.clone(),
            None => default_location(dataset, DEFAULT_LOCATION_B, 1)?,
        };
        for location in [&location_a, &location_b] {
            if !locations.contains(location) {
                return Err(SelectionError::UnknownLocation {
                    location: location.clone(),
                });
            }
        }

        Ok(ComparisonRequest {
            model_series,
            variant,
            location_a,
            location_b,
        })
    }
}

fn default_location(
    dataset: &PriceDataset,
    preferred: &str,
    fallback: usize,
) -> Result<String, SelectionError> {
    let locations = dataset.locations();
    if locations.contains(preferred) {
        return Ok(preferred.to_string());
    }
    locations
        .get(fallback)
        .or_else(|| locations.get(0))
        .map(str::to_string)
        .ok_or(SelectionError::EmptyDataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use otr_model::PriceRecord;

    fn dataset(rows: &[(&str, &str, &str)]) -> PriceDataset {
        PriceDataset::new(
            rows.iter()
                .map(|(model, variant, location)| {
                    PriceRecord::new(*model, *variant, *location, Some(1.0))
                })
                .collect(),
        )
    }

    #[test]
    fn defaults_prefer_named_locations() {
        let dataset = dataset(&[
            ("X", "A", "Bali"),
            ("X", "A", "Jawa Barat"),
            ("X", "A", "DKI"),
        ]);
        let request = Selection::default().resolve(&dataset).unwrap();

        assert_eq!(request.model_series, "X");
        assert_eq!(request.variant, "A");
        assert_eq!(request.location_a, "DKI");
        assert_eq!(request.location_b, "Jawa Barat");
    }

    #[test]
    fn defaults_fall_back_to_positions() {
        let dataset = dataset(&[("X", "A", "North"), ("X", "A", "South")]);
        let request = Selection::default().resolve(&dataset).unwrap();

        assert_eq!(request.location_a, "North");
        assert_eq!(request.location_b, "South");
    }

    #[test]
    fn single_location_is_used_for_both_sides() {
        let dataset = dataset(&[("X", "A", "North")]);
        let request = Selection::default().resolve(&dataset).unwrap();

        assert_eq!(request.location_a, "North");
        assert_eq!(request.location_b, "North");
    }

    #[test]
    fn empty_dataset_cannot_resolve() {
        let dataset = PriceDataset::new(Vec::new());
        assert_eq!(
            Selection::default().resolve(&dataset),
            Err(SelectionError::EmptyDataset)
        );
        assert_eq!(
            SelectionError::EmptyDataset.to_string(),
            "the price dataset has no model series or locations"
        );
    }

    #[test]
    fn unpriced_records_still_resolve() {
        let dataset = PriceDataset::new(vec![
            PriceRecord::new("X", "A", "North", None),
            PriceRecord::new("X", "A", "South", None),
        ]);
        let request = Selection::default().resolve(&dataset).unwrap();

        assert_eq!(request.model_series, "X");
        assert_eq!(request.location_a, "North");
        assert_eq!(request.location_b, "South");
    }
}
