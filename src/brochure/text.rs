//! URL discovery in the visible text of brochure pages

use regex::Regex;
use std::sync::LazyLock;

/// An http(s) URL runs until whitespace or a closing parenthesis
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s)]+").expect("URL pattern is valid"));

/// Extracts the text of a single page
///
/// Returns `None` if the page content cannot be decoded; such pages simply
/// contribute no text links.
pub fn page_text(doc: &lopdf::Document, page_number: u32) -> Option<String> {
    match doc.extract_text(&[page_number]) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::debug!("Could not extract text from page {}: {}", page_number, e);
            None
        }
    }
}

/// Finds every URL-looking substring in the text, in order of appearance
pub fn find_text_urls(text: &str) -> Vec<String> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
