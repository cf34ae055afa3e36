//! Per-page results and their aggregation
//!
//! Every unit of work (a brochure link, a grid card) produces either records
//! or a failure value. The report keeps both: records feed the spreadsheet,
//! failures feed the diagnostics.

use crate::crawler::parser::ProductRecord;
use crate::ScrapeError;
use chrono::{DateTime, Utc};
use url::Url;

/// Records extracted from one brochure link
#[derive(Debug)]
pub struct PageHarvest {
    /// The brochure link that was fetched
    pub url: String,
    /// Records in card order
    pub records: Vec<ProductRecord>,
    /// Grid cards that yielded nothing
    pub card_failures: Vec<CardFailure>,
}

impl PageHarvest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            records: Vec::new(),
            card_failures: Vec::new(),
        }
    }
}

/// A grid card whose detail page could not be turned into a record
#[derive(Debug)]
pub struct CardFailure {
    pub detail_url: Url,
    pub kind: CardFailureKind,
}

#[derive(Debug)]
pub enum CardFailureKind {
    /// The detail page was fetched but matched no layout
    NoData,
    /// The detail page could not be fetched
    Fetch(ScrapeError),
}

/// A brochure link whose page could not be fetched
#[derive(Debug)]
pub struct PageFailure {
    pub url: String,
    pub error: ScrapeError,
}

/// Aggregated outcome of a whole run
#[derive(Debug)]
pub struct HarvestReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    /// Number of unique links found in the brochure
    pub links_discovered: usize,
    /// Brochure links fetched successfully
    pub pages_fetched: usize,
    /// All records, in link processing order
    pub records: Vec<ProductRecord>,
    pub page_failures: Vec<PageFailure>,
    pub card_failures: Vec<CardFailure>,
}

impl HarvestReport {
    /// Creates an empty report for a run over `links_discovered` links
    pub fn new(links_discovered: usize) -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            links_discovered,
            pages_fetched: 0,
            records: Vec::new(),
            page_failures: Vec::new(),
            card_failures: Vec::new(),
        }
    }

    /// Adds the outcome of one brochure link
    ///
    /// Records are appended after those of previously absorbed pages.
    pub fn absorb(&mut self, outcome: Result<PageHarvest, PageFailure>) {
        match outcome {
            Ok(page) => {
                self.pages_fetched += 1;
                self.records.extend(page.records);
                self.card_failures.extend(page.card_failures);
            }
            Err(failure) => self.page_failures.push(failure),
        }
    }

    /// Marks the end of the run
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Wall-clock duration, once finished
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.finished_at.map(|finished| finished - self.started_at)
    }

    /// Cards skipped because their detail page had no data
    pub fn cards_without_data(&self) -> usize {
        self.card_failures
            .iter()
            .filter(|f| matches!(f.kind, CardFailureKind::NoData))
            .count()
    }

    /// Cards skipped because their detail page could not be fetched
    pub fn cards_failed(&self) -> usize {
        self.card_failures.len() - self.cards_without_data()
    }
}
