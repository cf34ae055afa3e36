//! Brochure link extraction
//!
//! This module opens the source PDF and collects every distinct http(s) URL
//! it references, both from Link annotations and from the visible page text.

mod annotations;
mod text;

pub use annotations::page_link_uris;
pub use text::{find_text_urls, page_text};

use crate::ScrapeError;
use lopdf::Document;
use std::collections::HashSet;
use std::path::Path;

/// Opens a PDF brochure and returns its unique http(s) links
///
/// Links are returned in discovery order: page by page, annotations before
/// text, first occurrence wins.
///
/// # Errors
///
/// Returns `ScrapeError::Pdf` if the file does not exist or is not a valid
/// PDF document.
///
/// # Example
///
/// ```no_run
/// use brochure_scraper::brochure::extract_links;
/// use std::path::Path;
///
/// let links = extract_links(Path::new("brochure.pdf")).unwrap();
/// println!("{} links", links.len());
/// ```
pub fn extract_links(pdf_path: &Path) -> Result<Vec<String>, ScrapeError> {
    let doc = Document::load(pdf_path).map_err(|e| ScrapeError::Pdf {
        path: pdf_path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!(
        "Opened {} ({} pages)",
        pdf_path.display(),
        doc.get_pages().len()
    );

    Ok(extract_document_links(&doc))
}

/// Collects the unique http(s) links of an already loaded document
pub fn extract_document_links(doc: &Document) -> Vec<String> {
    let mut links = LinkSet::default();

    for (page_number, page_id) in doc.get_pages() {
        for uri in page_link_uris(doc, page_id) {
            if uri.starts_with("http") {
                links.insert(uri);
            }
        }

        if let Some(text) = page_text(doc, page_number) {
            for url in find_text_urls(&text) {
                links.insert(url);
            }
        }
    }

    links.into_vec()
}

/// Insertion-ordered set of link strings
#[derive(Debug, Default)]
struct LinkSet {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl LinkSet {
    fn insert(&mut self, link: String) {
        if self.seen.insert(link.clone()) {
            self.ordered.push(link);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}
