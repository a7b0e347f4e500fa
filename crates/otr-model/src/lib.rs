//! Data model for OTR price comparison.
//!
//! - [`PriceRecord`]: one dataset row with an optional numeric price
//! - [`ComparisonRequest`]: the four keys selecting what to compare
//! - [`ComparisonResult`]: both prices plus their difference metrics
//! - [`PercentageDifference`]: relative difference, or the undefined sentinel

pub mod columns;
pub mod comparison;
pub mod record;

pub use comparison::{ComparisonRequest, ComparisonResult, PercentageDifference};
pub use record::{PriceKey, PriceRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_matches_exact_triple() {
        let record = PriceRecord::new("Avanza", "1.3 E MT", "DKI", Some(250_000_000.0));
        assert!(record.matches("Avanza", "1.3 E MT", "DKI"));
        assert!(!record.matches("Avanza", "1.3 E MT", "dki"));
        assert!(!record.matches("Avanza", "1.5 G CVT", "DKI"));
    }

    #[test]
    fn percentage_undefined_has_no_value() {
        assert_eq!(PercentageDifference::Undefined.value(), None);
        assert_eq!(PercentageDifference::Value(12.5).value(), Some(12.5));
        assert!(PercentageDifference::Undefined.is_undefined());
    }
}
