//! Price lookup and two-location comparison.

use std::fmt;

use tracing::debug;

use otr_model::{ComparisonRequest, ComparisonResult, PercentageDifference, PriceRecord};

/// One or both sides of a comparison have no priced record.
///
/// Carries both attempted locations; `missing_a` / `missing_b` say which
/// ones failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    pub model_series: String,
    pub variant: String,
    pub location_a: String,
    pub location_b: String,
    pub missing_a: bool,
    pub missing_b: bool,
}

impl NotFound {
    /// Locations without a priced record, in request order.
    pub fn missing_locations(&self) -> Vec<&str> {
        let mut missing = Vec::with_capacity(2);
        if self.missing_a {
            missing.push(self.location_a.as_str());
        }
        if self.missing_b && !(self.missing_a && self.location_a == self.location_b) {
            missing.push(self.location_b.as_str());
        }
        missing
    }
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no price found for {} {} in {}",
            self.model_series,
            self.variant,
            self.missing_locations().join(" and ")
        )
    }
}

impl std::error::Error for NotFound {}

/// Price of the first record matching the triple that has a present price.
///
/// Records with an absent price never match.
pub fn find_price(
    records: &[PriceRecord],
    model_series: &str,
    variant: &str,
    location: &str,
) -> Option<f64> {
    records
        .iter()
        .filter(|record| record.matches(model_series, variant, location))
        .find_map(|record| record.price_otr)
}

/// Compares the price of one configuration between two locations.
///
/// Returns [`NotFound`] when either side has no priced record; no partial
/// result is produced.
pub fn compare(
    records: &[PriceRecord],
    request: &ComparisonRequest,
) -> Result<ComparisonResult, NotFound> {
    let price_a = find_price(
        records,
        &request.model_series,
        &request.variant,
        &request.location_a,
    );
    let price_b = find_price(
        records,
        &request.model_series,
        &request.variant,
        &request.location_b,
    );

    let (Some(price_a), Some(price_b)) = (price_a, price_b) else {
        return Err(NotFound {
            model_series: request.model_series.clone(),
            variant: request.variant.clone(),
            location_a: request.location_a.clone(),
            location_b: request.location_b.clone(),
            missing_a: price_a.is_none(),
            missing_b: price_b.is_none(),
        });
    };

    let absolute_difference = (price_a - price_b).abs();
    let percentage_difference = PercentageDifference::between(price_a, price_b);
    debug!(
        model_series = %request.model_series,
        variant = %request.variant,
        location_a = %request.location_a,
        location_b = %request.location_b,
        price_a,
        price_b,
        absolute_difference,
        "compared prices"
    );

    Ok(ComparisonResult {
        model_series: request.model_series.clone(),
        variant: request.variant.clone(),
        location_a: request.location_a.clone(),
        price_a,
        location_b: request.location_b.clone(),
        price_b,
        absolute_difference,
        percentage_difference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_price_skips_absent_prices() {
        let records = vec![
            PriceRecord::new("X", "A", "North", None),
            PriceRecord::new("X", "A", "North", Some(90.0)),
        ];
        assert_eq!(find_price(&records, "X", "A", "North"), Some(90.0));
        assert_eq!(find_price(&records, "X", "A", "South"), None);
    }

    #[test]
    fn not_found_message_names_missing_locations() {
        let error = NotFound {
            model_series: "X".to_string(),
            variant: "A".to_string(),
            location_a: "North".to_string(),
            location_b: "East".to_string(),
            missing_a: false,
            missing_b: true,
        };
        assert_eq!(error.to_string(), "no price found for X A in East");
    }

    #[test]
    fn not_found_same_location_named_once() {
        let error = NotFound {
            model_series: "X".to_string(),
            variant: "A".to_string(),
            location_a: "East".to_string(),
            location_b: "East".to_string(),
            missing_a: true,
            missing_b: true,
        };
        assert_eq!(error.missing_locations(), vec!["East"]);
    }
}
