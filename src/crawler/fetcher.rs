//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper:
//! - Building the HTTP client with timeout and user agent
//! - GET requests for brochure pages and grid card detail pages
//! - Error classification into HTTP and network failures
//!
//! There is no retry; each call issues exactly one request.

use crate::config::FetchConfig;
use crate::ScrapeError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// User agent sent when the configuration does not override it
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The URL that was requested
    pub url: String,
    /// Final URL after redirects; relative links resolve against it
    pub final_url: Url,
    /// HTTP status code
    pub status_code: u16,
    /// Page body content
    pub body: String,
}

/// Builds an HTTP client with the configured timeout and user agent
///
/// Redirects follow reqwest's default policy.
///
/// # Example
///
/// ```no_run
/// use brochure_scraper::config::FetchConfig;
/// use brochure_scraper::crawler::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    let user_agent = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx | `Ok(FetchedPage)` |
/// | Any other status | `ScrapeError::Http` |
/// | Timeout, connection or body failure | `ScrapeError::Network` |
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, ScrapeError> {
    let network_error = |source: reqwest::Error| ScrapeError::Network {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(network_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Http {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().clone();
    let body = response.text().await.map_err(network_error)?;

    tracing::debug!("Fetched {} ({} bytes)", final_url, body.len());

    Ok(FetchedPage {
        url: url.to_string(),
        final_url,
        status_code: status.as_u16(),
        body,
    })
}
