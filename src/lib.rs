//! Brochure Scraper: product codes and prices from a PDF brochure
//!
//! This crate reads the links embedded in a PDF brochure, fetches every linked
//! shop page, extracts product codes and prices from the known page layouts and
//! writes the collected rows to a spreadsheet.

pub mod brochure;
pub mod config;
pub mod crawler;
pub mod output;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for brochure scraping operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to open PDF {}: {message}", path.display())]
    Pdf { path: PathBuf, message: String },

    #[error("HTTP {status} for {url}")]
    Http { url: String, status: u16 },

    #[error("Network error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Failed to write {}: {message}", path.display())]
    Write { path: PathBuf, message: String },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for scraping operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use brochure::extract_links;
pub use config::Config;
pub use crawler::{run, HarvestReport, ProductRecord, RunOutcome};
pub use output::{choose_output_path, export_records, write_records};
