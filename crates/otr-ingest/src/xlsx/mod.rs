//! Spreadsheet workbook reading.

mod reader;

pub use reader::read_xlsx_table;
