//! Tests for otr-model types.

use otr_model::{ComparisonResult, PercentageDifference, PriceRecord};

#[test]
fn percentage_between_nonzero_base() {
    assert_eq!(
        PercentageDifference::between(100_000.0, 120_000.0),
        PercentageDifference::Value(20.0)
    );
    assert_eq!(
        PercentageDifference::between(200.0, 150.0),
        PercentageDifference::Value(-25.0)
    );
}

#[test]
fn percentage_between_zero_base() {
    assert_eq!(
        PercentageDifference::between(0.0, 50_000.0),
        PercentageDifference::Undefined
    );
    assert_eq!(
        PercentageDifference::between(0.0, 0.0),
        PercentageDifference::Value(0.0)
    );
}

#[test]
fn percentage_display() {
    assert_eq!(PercentageDifference::Value(20.0).to_string(), "20.00%");
    assert_eq!(PercentageDifference::Value(-3.456).to_string(), "-3.46%");
    assert_eq!(PercentageDifference::Undefined.to_string(), "not defined");
}

#[test]
fn result_serializes() {
    let result = ComparisonResult {
        model_series: "X".to_string(),
        variant: "A".to_string(),
        location_a: "North".to_string(),
        price_a: 0.0,
        location_b: "South".to_string(),
        price_b: 50_000.0,
        absolute_difference: 50_000.0,
        percentage_difference: PercentageDifference::Undefined,
    };
    let json = serde_json::to_string(&result).expect("serialize result");
    assert!(json.contains("\"percentage_difference\":\"undefined\""));
    let round: ComparisonResult = serde_json::from_str(&json).expect("deserialize result");
    assert_eq!(round, result);
}

#[test]
fn record_key_borrows_fields() {
    let record = PriceRecord::new("X", "A", "North", None);
    let key = record.key();
    assert_eq!(key.model_series, "X");
    assert_eq!(key.variant, "A");
    assert_eq!(key.location, "North");
}
