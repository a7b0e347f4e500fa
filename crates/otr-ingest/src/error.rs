//! Error types for price dataset ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a price dataset.
///
/// Any of these aborts the load as a whole. Malformed individual prices are
/// not errors; they load as absent.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Dataset file not found.
    #[error("dataset file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is {size} bytes, larger than the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File starts with a byte order mark for an unsupported encoding.
    #[error("unsupported encoding {encoding} in {path}, expected UTF-8")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// File extension names a format the loader cannot read.
    #[error("unsupported dataset format '.{extension}' for {path}, expected .csv or .xlsx")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === Workbook Errors ===
    /// Failed to open or read a spreadsheet workbook.
    #[error("failed to read workbook {path}: {message}")]
    WorkbookRead { path: PathBuf, message: String },

    /// Workbook has no worksheet or its first worksheet has no header row.
    #[error("workbook has no data on its first worksheet: {path}")]
    EmptySheet { path: PathBuf },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file is empty (no header row).
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Required column not found in the dataset.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::MissingColumn {
            column: "Harga OTR".to_string(),
            path: PathBuf::from("/data/prices.csv"),
        };
        assert_eq!(
            err.to_string(),
            "required column 'Harga OTR' not found in /data/prices.csv"
        );
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = IngestError::UnsupportedFormat {
            path: PathBuf::from("/data/prices.json"),
            extension: "json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported dataset format '.json' for /data/prices.json, expected .csv or .xlsx"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("Lokasi".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
