//! Scrape coordinator - main run orchestration logic
//!
//! This module drives a run from start to finish:
//! - Reading the brochure links
//! - Fetching every linked page, one request at a time
//! - Resolving grid pages into their detail pages
//! - Aggregating records and failures
//! - Writing the spreadsheet

use crate::brochure::extract_links;
use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::harvest::{CardFailure, CardFailureKind, HarvestReport, PageFailure, PageHarvest};
use crate::crawler::parser::{classify_page, parse_detail_page, PageLayout, ProductRecord};
use crate::output::export_records;
use crate::ScrapeError;
use reqwest::Client;
use std::path::PathBuf;
use url::Url;

/// How a run ended
#[derive(Debug)]
pub enum RunOutcome {
    /// Nothing was extracted; no file was written
    NoProducts(HarvestReport),
    /// Records were written to `path`
    Saved { path: PathBuf, report: HarvestReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HarvestReport {
        match self {
            Self::NoProducts(report) => report,
            Self::Saved { report, .. } => report,
        }
    }
}

/// Reads the brochure links in the order they will be processed
///
/// Links are sorted when `fetch.sort-links` is enabled, otherwise they keep
/// their discovery order.
pub fn discover_links(config: &Config) -> Result<Vec<String>, ScrapeError> {
    let mut links = extract_links(config.input_pdf_path())?;
    if config.fetch.sort_links {
        links.sort();
    }
    Ok(links)
}

/// Runs a complete scrape
///
/// Only a PDF that cannot be opened, an HTTP client that cannot be built, or a
/// spreadsheet that cannot be written ends the run with an error. Page and
/// card failures are recorded in the report.
pub async fn run(config: Config) -> Result<RunOutcome, ScrapeError> {
    let links = discover_links(&config)?;
    tracing::info!("Discovered {} links in brochure.", links.len());

    let client = build_http_client(&config.fetch)?;

    let mut report = harvest(&client, &links).await;
    report.finish();

    if report.is_empty() {
        return Ok(RunOutcome::NoProducts(report));
    }

    let path = export_records(&report.records, config.output_path())?;
    Ok(RunOutcome::Saved { path, report })
}

/// Fetches every link in order and aggregates the results
pub async fn harvest(client: &Client, links: &[String]) -> HarvestReport {
    let mut report = HarvestReport::new(links.len());

    for url in links {
        let outcome = match fetch_products(client, url).await {
            Ok(page) => {
                tracing::info!("{}: found {} item(s)", url, page.records.len());
                Ok(page)
            }
            Err(error) => {
                tracing::error!("Error fetching {}: {}", url, error);
                Err(PageFailure {
                    url: url.clone(),
                    error,
                })
            }
        };
        report.absorb(outcome);
    }

    report
}

/// Fetches one brochure link and extracts its products
///
/// A single product page yields one record. A grid page costs one extra
/// request per card; cards that fail are recorded and skipped. A page that
/// matches no layout yields no records.
///
/// # Errors
///
/// Only a failure to fetch `url` itself is returned as an error.
pub async fn fetch_products(client: &Client, url: &str) -> Result<PageHarvest, ScrapeError> {
    let page = fetch_page(client, url).await?;
    let mut harvest = PageHarvest::new(url);

    match classify_page(&page.body, &page.final_url) {
        PageLayout::Product(record) => harvest.records.push(record),
        PageLayout::Grid(detail_urls) => {
            tracing::debug!("{}: grid with {} card(s)", url, detail_urls.len());
            for detail_url in detail_urls {
                match fetch_card(client, &detail_url).await {
                    Ok(record) => harvest.records.push(record),
                    Err(kind) => harvest.card_failures.push(CardFailure { detail_url, kind }),
                }
            }
        }
        PageLayout::Unrecognized => {
            tracing::debug!("{}: no known layout", url);
        }
    }

    Ok(harvest)
}

/// Fetches and parses one card's detail page
async fn fetch_card(
    client: &Client,
    detail_url: &Url,
) -> Result<ProductRecord, CardFailureKind> {
    match fetch_page(client, detail_url.as_str()).await {
        Ok(detail) => parse_detail_page(&detail.body).ok_or_else(|| {
            tracing::warn!("No data on detail page {}", detail_url);
            CardFailureKind::NoData
        }),
        Err(e) => {
            tracing::error!("Error fetching detail {}: {}", detail_url, e);
            Err(CardFailureKind::Fetch(e))
        }
    }
}
