//! Output module for writing scraped records
//!
//! This module handles:
//! - Choosing an output path that never overwrites an existing file
//! - Writing records as an xlsx or csv spreadsheet
//! - Printing the run summary

mod path;
mod spreadsheet;
pub mod stats;

pub use path::choose_output_path;
pub use spreadsheet::{write_records, SpreadsheetFormat, COLUMNS};
pub use stats::{format_report, print_report};

use crate::crawler::ProductRecord;
use crate::ScrapeError;
use std::path::{Path, PathBuf};

/// Writes the records next to `base_path` without overwriting anything
///
/// # Returns
///
/// * `Ok(PathBuf)` - The path actually written
/// * `Err(ScrapeError)` - The spreadsheet could not be written
pub fn export_records(records: &[ProductRecord], base_path: &Path) -> Result<PathBuf, ScrapeError> {
    let path = choose_output_path(base_path);
    tracing::debug!("Writing {} records to {}", records.len(), path.display());
    write_records(records, &path)?;
    Ok(path)
}
