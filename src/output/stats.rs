//! Run summary output
//!
//! This module renders the aggregated run report for the console.

use crate::crawler::{CardFailureKind, HarvestReport};
use std::fmt::Write;

/// Formats the report as a human-readable summary
pub fn format_report(report: &HarvestReport) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "=== Run Summary ===\n");
    let _ = writeln!(out, "Overview:");
    let _ = writeln!(out, "  Links discovered: {}", report.links_discovered);
    let _ = writeln!(out, "  Pages fetched: {}", report.pages_fetched);
    let _ = writeln!(out, "  Pages failed: {}", report.page_failures.len());
    let _ = writeln!(out, "  Cards without data: {}", report.cards_without_data());
    let _ = writeln!(out, "  Cards failed: {}", report.cards_failed());
    let _ = writeln!(out, "  Records extracted: {}", report.records.len());
    if let Some(duration) = report.duration() {
        let _ = writeln!(
            out,
            "  Duration: {:.1}s",
            duration.num_milliseconds() as f64 / 1000.0
        );
    }

    if !report.page_failures.is_empty() {
        let _ = writeln!(out, "\nFailed Pages ({}):", report.page_failures.len());
        for failure in &report.page_failures {
            let _ = writeln!(out, "  - {}: {}", failure.url, failure.error);
        }
    }

    if !report.card_failures.is_empty() {
        let _ = writeln!(out, "\nSkipped Cards ({}):", report.card_failures.len());
        for failure in &report.card_failures {
            match &failure.kind {
                CardFailureKind::NoData => {
                    let _ = writeln!(out, "  - {}: no data", failure.detail_url);
                }
                CardFailureKind::Fetch(error) => {
                    let _ = writeln!(out, "  - {}: {}", failure.detail_url, error);
                }
            }
        }
    }

    out
}

/// Prints the run summary to stdout
pub fn print_report(report: &HarvestReport) {
    print!("{}", format_report(report));
}
