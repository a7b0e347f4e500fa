//! Comparison result export.
//!
//! A [`ComparisonResult`](otr_model::ComparisonResult) is flattened into a
//! single-row [`ExportRecord`] and handed to a [`Serializer`]:
//!
//! - **XLSX**: one worksheet, header row plus one data row
//! - **PDF**: a label/value listing, one pair per line
//! - **CSV**: header row plus one data row

mod delimited;
mod error;
mod format;
mod pdf;
mod record;
mod serializer;
mod xlsx;

pub use delimited::CsvSerializer;
pub use error::{ExportError, Result};
pub use format::{format_percentage, format_rupiah};
pub use pdf::{PdfSerializer, document_lines};
pub use record::{ExportField, ExportRecord, ExportValue};
pub use serializer::{ExportFormat, Serializer, export_to_path};
pub use xlsx::XlsxSerializer;
