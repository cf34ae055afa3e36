use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for a scraping run
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl Config {
    /// Builds a configuration from the two paths, using default fetch settings
    pub fn new(input_pdf_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input: InputConfig {
                pdf_path: input_pdf_path.into(),
            },
            output: OutputConfig {
                path: output_path.into(),
            },
            fetch: FetchConfig::default(),
        }
    }

    /// Location of the source brochure
    pub fn input_pdf_path(&self) -> &Path {
        &self.input.pdf_path
    }

    /// Base destination for the spreadsheet
    pub fn output_path(&self) -> &Path {
        &self.output.path
    }
}

/// Input document configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Path to the PDF brochure
    #[serde(rename = "pdf-path")]
    pub pdf_path: PathBuf,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Base path of the spreadsheet; a numeric suffix is added if it exists
    pub path: PathBuf,
}

/// HTTP fetch behavior
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Optional User-Agent override
    #[serde(rename = "user-agent", default)]
    pub user_agent: Option<String>,

    /// Process links in sorted order instead of discovery order
    #[serde(rename = "sort-links", default = "default_sort_links")]
    pub sort_links: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            sort_links: true,
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_sort_links() -> bool {
    true
}
