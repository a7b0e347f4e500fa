//! Workbook reading into a Polars DataFrame.
//!
//! Only the first worksheet is read, and its first used row is the header.
//! Cells are rendered to text so the frame has the same all-text shape as
//! [`read_csv_table`](crate::csv::read_csv_table) produces; numeric cells
//! render with the shortest representation that parses back to the same
//! `f64`.

use std::collections::HashSet;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use crate::csv::check_file_size;
use crate::error::{IngestError, Result};

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => text.clone(),
        Data::Float(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        Data::DateTime(value) => value.as_f64().to_string(),
        Data::Error(error) => format!("{error:?}"),
    }
}

/// Header names made unique: blank headers get a positional name and
/// repeats get a numeric suffix.
fn unique_headers(row: &[Data]) -> Vec<String> {
    let mut seen = HashSet::new();
    row.iter()
        .enumerate()
        .map(|(idx, cell)| {
            let text = cell_text(cell);
            let base = if text.trim().is_empty() {
                format!("column_{}", idx + 1)
            } else {
                text
            };
            let mut name = base.clone();
            let mut suffix = 1;
            while !seen.insert(name.clone()) {
                name = format!("{base}_{suffix}");
                suffix += 1;
            }
            name
        })
        .collect()
}

/// Reads the first worksheet of a workbook into a DataFrame with every
/// column as text.
pub fn read_xlsx_table(path: &Path) -> Result<DataFrame> {
    check_file_size(path)?;

    let workbook_error = |message: String| IngestError::WorkbookRead {
        path: path.to_path_buf(),
        message,
    };
    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptySheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| workbook_error(e.to_string()))?;

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(header_row) => unique_headers(header_row),
        None => {
            return Err(IngestError::EmptySheet {
                path: path.to_path_buf(),
            });
        }
    };

    let mut values: Vec<Vec<String>> = vec![Vec::with_capacity(range.height()); headers.len()];
    for row in rows {
        for (column, cell) in values.iter_mut().zip(row) {
            column.push(cell_text(cell));
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(values)
        .map(|(name, column)| Series::new(name.as_str().into(), column).into_column())
        .collect();
    let df = DataFrame::new(columns)?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read xlsx table"
    );
    Ok(df)
}
