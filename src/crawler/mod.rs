//! Crawler module for product page fetching and processing
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching
//! - Product page layout detection and field extraction
//! - Aggregation of per-page results
//! - Overall run coordination

mod coordinator;
mod fetcher;
mod harvest;
mod parser;

pub use coordinator::{discover_links, fetch_products, harvest, run, RunOutcome};
pub use fetcher::{build_http_client, fetch_page, FetchedPage, DEFAULT_USER_AGENT};
pub use harvest::{CardFailure, CardFailureKind, HarvestReport, PageFailure, PageHarvest};
pub use parser::{
    classify_page, parse_detail_page, parse_product_grid, parse_single_product, PageLayout,
    ProductRecord,
};
