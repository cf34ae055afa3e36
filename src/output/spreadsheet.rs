//! Spreadsheet serialization of product records
//!
//! The sheet always has the header row `invcode`, `price` followed by one row
//! per record. Every cell is written as text so codes like `00123` and prices
//! like `19.99 лв.` round-trip unchanged.

use crate::crawler::ProductRecord;
use crate::ScrapeError;
use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::Path;

/// Column headers, in order
pub const COLUMNS: [&str; 2] = ["invcode", "price"];

/// File format of the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetFormat {
    Xlsx,
    Csv,
}

impl SpreadsheetFormat {
    /// Picks the format from the file extension; anything but `.csv` is xlsx
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Xlsx,
        }
    }
}

/// Writes the records to `path`, replacing any existing file
///
/// Callers that must not overwrite use [`choose_output_path`] first.
///
/// [`choose_output_path`]: crate::output::choose_output_path
pub fn write_records(records: &[ProductRecord], path: &Path) -> Result<(), ScrapeError> {
    match SpreadsheetFormat::from_path(path) {
        SpreadsheetFormat::Xlsx => write_xlsx(records, path).map_err(|e| write_error(path, e)),
        SpreadsheetFormat::Csv => write_csv(records, path).map_err(|e| write_error(path, e)),
    }
}

fn write_error(path: &Path, error: impl std::fmt::Display) -> ScrapeError {
    ScrapeError::Write {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

fn write_xlsx(records: &[ProductRecord], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in (0u16..).zip(COLUMNS) {
        worksheet.write_string(0, col, header)?;
    }

    for (row, record) in (1u32..).zip(records) {
        worksheet.write_string(row, 0, record.invcode.as_str())?;
        worksheet.write_string(row, 1, record.price.as_str())?;
    }

    workbook.save(path)
}

fn write_csv(records: &[ProductRecord], path: &Path) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;

    // serialize() only emits headers once a record is written
    writer.write_record(COLUMNS)?;
    for record in records {
        writer.write_record([record.invcode.as_str(), record.price.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}
