//! Dataset format detection.

use std::path::Path;

use polars::prelude::DataFrame;

use crate::csv::read_csv_table;
use crate::error::{IngestError, Result};
use crate::xlsx::read_xlsx_table;

/// On-disk layout of a price dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// Comma-separated text with a single header line.
    Csv,
    /// Spreadsheet workbook; the first worksheet holds the table.
    Xlsx,
}

impl DatasetFormat {
    /// Picks the format from the file extension, case-insensitively.
    ///
    /// A path without an extension is read as CSV.
    pub fn from_path(path: &Path) -> Result<Self> {
        let Some(extension) = path.extension() else {
            return Ok(Self::Csv);
        };
        let extension = extension.to_string_lossy().to_ascii_lowercase();
        match extension.as_str() {
            "csv" | "txt" => Ok(Self::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Self::Xlsx),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Reads the dataset at `path` into an all-text frame, dispatching on its
/// extension.
pub fn read_dataset_table(path: &Path) -> Result<DataFrame> {
    match DatasetFormat::from_path(path)? {
        DatasetFormat::Csv => read_csv_table(path),
        DatasetFormat::Xlsx => read_xlsx_table(path),
    }
}
