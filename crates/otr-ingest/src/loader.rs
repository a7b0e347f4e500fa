//! Price dataset loading.

use std::path::Path;
use std::time::Instant;

use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::{debug, info};

use otr_model::{PriceRecord, columns};

use crate::csv::ColumnLookup;
use crate::error::{IngestError, Result};
use crate::format::read_dataset_table;
use crate::polars_utils::{any_to_string, parse_price};

/// Records loaded from a dataset, with coercion statistics.
#[derive(Debug, Clone, Default)]
pub struct PriceLoad {
    pub records: Vec<PriceRecord>,
    /// Rows skipped because all three key cells were empty.
    pub blank_rows: usize,
    /// Records whose price cell was empty or unparseable.
    pub absent_prices: usize,
}

/// Loads the price dataset at `path` into typed records.
pub fn load_price_records(path: &Path) -> Result<Vec<PriceRecord>> {
    read_price_records(path).map(|load| load.records)
}

/// Loads the price dataset at `path`, keeping coercion statistics.
///
/// The file is read as CSV or as a workbook depending on its extension.
pub fn read_price_records(path: &Path) -> Result<PriceLoad> {
    let start = Instant::now();
    let df = read_dataset_table(path)?;
    let load = price_records_from_frame(&df).map_err(|error| match error {
        IngestError::MissingColumn { column, .. } => IngestError::MissingColumn {
            column,
            path: path.to_path_buf(),
        },
        other => other,
    })?;
    info!(
        path = %path.display(),
        records = load.records.len(),
        absent_prices = load.absent_prices,
        blank_rows = load.blank_rows,
        duration_ms = start.elapsed().as_millis(),
        "price dataset loaded"
    );
    Ok(load)
}

fn required_column<'a>(
    df: &'a DataFrame,
    lookup: &ColumnLookup,
    wanted: &str,
) -> Result<&'a Column> {
    let name = lookup
        .get(wanted)
        .ok_or_else(|| IngestError::MissingColumn {
            column: wanted.to_string(),
            path: Default::default(),
        })?;
    Ok(df.column(name)?)
}

fn cell(column: &Column, idx: usize) -> String {
    any_to_string(column.get(idx).unwrap_or(AnyValue::Null))
        .trim()
        .to_string()
}

/// Converts an already-read frame into price records.
///
/// Key cells are trimmed. The price is coerced per cell with
/// [`parse_price`]; failures load as `None`.
pub fn price_records_from_frame(df: &DataFrame) -> Result<PriceLoad> {
    let lookup = ColumnLookup::new(
        df.get_column_names()
            .into_iter()
            .map(|name| name.to_string()),
    );
    let model_col = required_column(df, &lookup, columns::MODEL_SERIES)?;
    let variant_col = required_column(df, &lookup, columns::VARIANT)?;
    let location_col = required_column(df, &lookup, columns::LOCATION)?;
    let price_col = required_column(df, &lookup, columns::PRICE_OTR)?;

    let mut load = PriceLoad {
        records: Vec::with_capacity(df.height()),
        ..PriceLoad::default()
    };
    for idx in 0..df.height() {
        let model_series = cell(model_col, idx);
        let variant = cell(variant_col, idx);
        let location = cell(location_col, idx);
        if model_series.is_empty() && variant.is_empty() && location.is_empty() {
            load.blank_rows += 1;
            continue;
        }
        let raw_price = cell(price_col, idx);
        let price_otr = parse_price(&raw_price);
        if price_otr.is_none() {
            load.absent_prices += 1;
            debug!(
                row = idx + 1,
                model_series = %model_series,
                location = %location,
                raw_price = %raw_price,
                "price not numeric, treated as absent"
            );
        }
        load.records
            .push(PriceRecord::new(model_series, variant, location, price_otr));
    }
    Ok(load)
}
