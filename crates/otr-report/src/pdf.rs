//! PDF serializer.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::{ExportError, Result};
use crate::format::format_rupiah;
use crate::record::{ExportRecord, ExportValue};
use crate::serializer::{ExportFormat, Serializer};

/// Default document title.
pub const DEFAULT_TITLE: &str = "OTR Price Comparison";

/// Renders the record as a simple label/value listing on one A4 page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfSerializer;

/// The `label: value` lines written to the document, one per field.
///
/// An empty value renders as `not defined`.
pub fn document_lines(record: &ExportRecord) -> Vec<String> {
    record
        .fields()
        .iter()
        .map(|field| {
            let value = match &field.value {
                ExportValue::Text(text) => text.clone(),
                ExportValue::Currency(amount) => format_rupiah(*amount),
                ExportValue::Percent(percent) => format!("{percent:.2}%"),
                ExportValue::Empty => "not defined".to_string(),
            };
            format!("{}: {value}", field.header)
        })
        .collect()
}

fn pdf_error(error: impl std::fmt::Debug) -> ExportError {
    ExportError::Pdf {
        message: format!("{error:?}"),
    }
}

impl Serializer for PdfSerializer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn serialize(&self, record: &ExportRecord) -> Result<Vec<u8>> {
        let (doc, page, layer) =
            PdfDocument::new(DEFAULT_TITLE, Mm(210.0), Mm(297.0), "Layer 1");
        let title_font = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;
        let body_font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?;
        let canvas = doc.get_page(page).get_layer(layer);

        canvas.use_text(DEFAULT_TITLE, 16.0, Mm(20.0), Mm(277.0), &title_font);
        let mut baseline = 262.0;
        for line in document_lines(record) {
            canvas.use_text(line, 11.0, Mm(20.0), Mm(baseline), &body_font);
            baseline -= 8.0;
        }

        doc.save_to_bytes().map_err(pdf_error)
    }
}
