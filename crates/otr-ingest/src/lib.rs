//! OTR price dataset ingestion.
//!
//! Reads a CSV price list or an XLSX workbook into typed
//! [`PriceRecord`](otr_model::PriceRecord)s. Every column is read as text;
//! the `Harga OTR` column is then coerced to a number per cell, with
//! unparseable values becoming absent instead of failing the load.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use otr_ingest::load_price_records;
//!
//! let records = load_price_records(Path::new("harga_mobil_baru.xlsx"))?;
//! ```

mod csv;
mod error;
mod format;
mod loader;
mod polars_utils;
mod xlsx;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    ColumnLookup, MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit,
    normalize_header, read_csv_table, validate_encoding,
};

// === Workbook Reading ===
pub use xlsx::read_xlsx_table;

// === Format Dispatch ===
pub use format::{DatasetFormat, read_dataset_table};

// === Price Loading ===
pub use loader::{PriceLoad, load_price_records, price_records_from_frame, read_price_records};

// === Value Conversion ===
pub use polars_utils::{any_to_string, parse_price};
