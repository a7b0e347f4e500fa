//! Flat single-row view of a comparison result.

use otr_model::{ComparisonResult, PercentageDifference};

/// A cell value in an exported record.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportValue {
    Text(String),
    Currency(f64),
    Percent(f64),
    /// No value; written as an empty cell.
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportField {
    pub header: String,
    pub value: ExportValue,
}

impl ExportField {
    fn new(header: impl Into<String>, value: ExportValue) -> Self {
        Self {
            header: header.into(),
            value,
        }
    }
}

/// One comparison flattened into ordered `(header, value)` pairs.
///
/// Price headers name their locations (`Price DKI`, `Price Jawa Barat`).
/// When both sides use the same location the headers get ` (1)` / ` (2)`
/// suffixes so they stay unique.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRecord {
    fields: Vec<ExportField>,
}

impl ExportRecord {
    pub fn from_result(result: &ComparisonResult) -> Self {
        let (price_a_header, price_b_header) = if result.location_a == result.location_b {
            (
                format!("Price {} (1)", result.location_a),
                format!("Price {} (2)", result.location_b),
            )
        } else {
            (
                format!("Price {}", result.location_a),
                format!("Price {}", result.location_b),
            )
        };
        let percentage = match result.percentage_difference {
            PercentageDifference::Value(value) => ExportValue::Percent(value),
            PercentageDifference::Undefined => ExportValue::Empty,
        };
        let fields = vec![
            ExportField::new(
                "Model Series",
                ExportValue::Text(result.model_series.clone()),
            ),
            ExportField::new("Variant", ExportValue::Text(result.variant.clone())),
            ExportField::new("Location 1", ExportValue::Text(result.location_a.clone())),
            ExportField::new(price_a_header, ExportValue::Currency(result.price_a)),
            ExportField::new("Location 2", ExportValue::Text(result.location_b.clone())),
            ExportField::new(price_b_header, ExportValue::Currency(result.price_b)),
            ExportField::new(
                "Absolute Difference",
                ExportValue::Currency(result.absolute_difference),
            ),
            ExportField::new("Percentage Difference (%)", percentage),
        ];
        Self { fields }
    }

    pub fn fields(&self) -> &[ExportField] {
        &self.fields
    }

    pub fn headers(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.header.as_str()).collect()
    }

    pub fn get(&self, header: &str) -> Option<&ExportValue> {
        self.fields
            .iter()
            .find(|field| field.header == header)
            .map(|field| &field.value)
    }
}
