//! CSV serializer.

use crate::error::{ExportError, Result};
use crate::record::{ExportRecord, ExportValue};
use crate::serializer::{ExportFormat, Serializer};

/// Writes the record as a header row plus one data row.
///
/// Prices are written as plain numbers, the percentage with two decimals,
/// and an empty value as an empty field.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvSerializer;

fn cell_text(value: &ExportValue) -> String {
    match value {
        ExportValue::Text(text) => text.clone(),
        ExportValue::Currency(amount) => amount.to_string(),
        ExportValue::Percent(percent) => format!("{percent:.2}"),
        ExportValue::Empty => String::new(),
    }
}

impl Serializer for CsvSerializer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn serialize(&self, record: &ExportRecord) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(record.headers())?;
        writer.write_record(record.fields().iter().map(|field| cell_text(&field.value)))?;
        writer
            .into_inner()
            .map_err(|error| ExportError::Csv(error.into_error().into()))
    }
}
