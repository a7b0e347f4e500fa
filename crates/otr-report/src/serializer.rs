//! Serializer seam and file output.

use std::path::Path;

use tracing::info;

use crate::error::{ExportError, Result};
use crate::record::ExportRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Pdf,
    Csv,
}

impl ExportFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Pdf => "application/pdf",
            Self::Csv => "text/csv",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Pdf => "pdf",
            Self::Csv => "csv",
        }
    }
}

/// Turns one export record into a byte payload.
pub trait Serializer {
    fn format(&self) -> ExportFormat;

    fn serialize(&self, record: &ExportRecord) -> Result<Vec<u8>>;
}

/// Serializes `record` and writes the payload to `path`.
pub fn export_to_path(
    serializer: &dyn Serializer,
    record: &ExportRecord,
    path: &Path,
) -> Result<()> {
    let bytes = serializer.serialize(record)?;
    std::fs::write(path, &bytes).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        format = serializer.format().extension(),
        bytes = bytes.len(),
        "comparison exported"
    );
    Ok(())
}
