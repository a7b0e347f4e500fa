//! XLSX serializer.

use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;
use crate::record::{ExportRecord, ExportValue};
use crate::serializer::{ExportFormat, Serializer};

/// Default worksheet name.
pub const DEFAULT_SHEET_NAME: &str = "Comparison";

/// Writes the record to a single worksheet: bold headers in row 1, values in
/// row 2. An empty value leaves its cell blank.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxSerializer;

impl Serializer for XlsxSerializer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Xlsx
    }

    fn serialize(&self, record: &ExportRecord) -> Result<Vec<u8>> {
        let header_format = Format::new().set_bold();
        let currency_format = Format::new().set_num_format("#,##0");
        let percent_format = Format::new().set_num_format("0.00");

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(DEFAULT_SHEET_NAME)?;

        for (col, field) in (0u16..).zip(record.fields()) {
            worksheet.write_string_with_format(0, col, &field.header, &header_format)?;
            match &field.value {
                ExportValue::Text(text) => {
                    worksheet.write_string(1, col, text)?;
                }
                ExportValue::Currency(amount) => {
                    worksheet.write_number_with_format(1, col, *amount, &currency_format)?;
                }
                ExportValue::Percent(percent) => {
                    worksheet.write_number_with_format(1, col, *percent, &percent_format)?;
                }
                ExportValue::Empty => {}
            }
            let width = field.header.chars().count().max(12) + 2;
            worksheet.set_column_width(col, width as f64)?;
        }

        Ok(workbook.save_to_buffer()?)
    }
}
