//! Load, compare, and export stages behind the `compare` command.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info, info_span, warn};

use otr_core::{NotFound, PriceDataset, Selection};
use otr_model::{ComparisonRequest, ComparisonResult};
use otr_report::{
    CsvSerializer, ExportError, ExportFormat, ExportRecord, PdfSerializer, Serializer,
    XlsxSerializer, export_to_path,
};

/// A requested export: which format, written where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    pub format: ExportFormat,
    pub path: PathBuf,
}

impl ExportTarget {
    pub fn new(format: ExportFormat, path: impl Into<PathBuf>) -> Self {
        Self {
            format,
            path: path.into(),
        }
    }
}

/// Result of one export attempt.
#[derive(Debug)]
pub struct ExportOutcome {
    pub target: ExportTarget,
    pub result: std::result::Result<(), ExportError>,
}

/// What a comparison run produced.
#[derive(Debug)]
pub enum CompareOutcome {
    Compared {
        request: ComparisonRequest,
        result: ComparisonResult,
        exports: Vec<ExportOutcome>,
    },
    NotFound(NotFound),
}

impl CompareOutcome {
    pub fn export_failures(&self) -> usize {
        match self {
            Self::Compared { exports, .. } => exports.iter().filter(|e| e.result.is_err()).count(),
            Self::NotFound(_) => 0,
        }
    }
}

/// Loads and indexes the dataset; any failure aborts the command.
pub fn load_dataset(path: &Path) -> Result<PriceDataset> {
    let span = info_span!("load", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let dataset = PriceDataset::load(path)
        .with_context(|| format!("load price dataset {}", path.display()))?;
    info!(
        records = dataset.records().len(),
        duration_ms = start.elapsed().as_millis(),
        "dataset ready"
    );
    Ok(dataset)
}

pub fn serializer_for(format: ExportFormat) -> Box<dyn Serializer> {
    match format {
        ExportFormat::Xlsx => Box::new(XlsxSerializer::default()),
        ExportFormat::Pdf => Box::new(PdfSerializer::default()),
        ExportFormat::Csv => Box::new(CsvSerializer),
    }
}

/// Runs every export independently; one failure does not stop the others.
pub fn run_exports(result: &ComparisonResult, targets: &[ExportTarget]) -> Vec<ExportOutcome> {
    if targets.is_empty() {
        return Vec::new();
    }
    let record = ExportRecord::from_result(result);
    targets
        .iter()
        .map(|target| {
            let serializer = serializer_for(target.format);
            let outcome = export_to_path(serializer.as_ref(), &record, &target.path);
            if let Err(export_error) = &outcome {
                error!(
                    path = %target.path.display(),
                    error = %export_error,
                    "export failed"
                );
            }
            ExportOutcome {
                target: target.clone(),
                result: outcome,
            }
        })
        .collect()
}

/// Resolves the selection, compares, and runs the requested exports.
///
/// An unknown selection key is an error. A missing price is a
/// [`CompareOutcome::NotFound`], not an error.
pub fn run_comparison(
    dataset: &PriceDataset,
    selection: &Selection,
    targets: &[ExportTarget],
) -> Result<CompareOutcome> {
    let request = selection.resolve(dataset).context("invalid selection")?;
    let span = info_span!(
        "compare",
        model_series = %request.model_series,
        variant = %request.variant
    );
    let _guard = span.enter();

    match dataset.compare(&request) {
        Ok(result) => {
            let exports = run_exports(&result, targets);
            Ok(CompareOutcome::Compared {
                request,
                result,
                exports,
            })
        }
        Err(not_found) => {
            warn!(missing = ?not_found.missing_locations(), "no matching price");
            Ok(CompareOutcome::NotFound(not_found))
        }
    }
}
