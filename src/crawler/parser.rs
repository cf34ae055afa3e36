//! HTML parser for product pages
//!
//! Two page layouts are recognized, tried in order:
//!
//! 1. **Single product**: a `Прод. код` label followed by the code, and a
//!    `#product-buy-card` block holding the price and its unit.
//! 2. **Grid**: a listing of product cards, each linking to a detail page
//!    that is itself a single product page.

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use url::Url;

/// Text of the label preceding the product code
pub const PRODUCT_CODE_LABEL: &str = "Прод. код";

/// Id of the element wrapping the price
pub const BUY_CARD_ID: &str = "product-buy-card";

/// Class marker of the large price figure
pub const PRICE_CLASS_MARKER: &str = "text-3xl";

/// Direct children of the listing grid that represent one product each
pub const CARD_SELECTOR: &str = "div.grid.place-items-center > div.flex.flex-col.relative";

/// A product code paired with its price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub invcode: String,
    pub price: String,
}

impl ProductRecord {
    pub fn new(invcode: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            invcode: invcode.into(),
            price: price.into(),
        }
    }
}

/// What a page turned out to contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLayout {
    /// A single product page with both fields present
    Product(ProductRecord),
    /// A listing page; holds the absolute detail URL of every card
    Grid(Vec<Url>),
    /// Neither layout matched
    Unrecognized,
}

/// A layout strategy inspects a document and claims it or passes
type LayoutStrategy = fn(&Html, &Url) -> Option<PageLayout>;

/// Strategies in priority order
const LAYOUTS: &[LayoutStrategy] = &[single_product_layout, grid_layout];

/// Parses a page and determines its layout
///
/// # Example
///
/// ```
/// use brochure_scraper::crawler::{classify_page, PageLayout};
/// use url::Url;
///
/// let base = Url::parse("https://shop.example.com/").unwrap();
/// let layout = classify_page("<html><body>Nothing here</body></html>", &base);
/// assert_eq!(layout, PageLayout::Unrecognized);
/// ```
pub fn classify_page(html: &str, base_url: &Url) -> PageLayout {
    let document = Html::parse_document(html);

    LAYOUTS
        .iter()
        .find_map(|layout| layout(&document, base_url))
        .unwrap_or(PageLayout::Unrecognized)
}

/// Parses a card's detail page, which only ever uses the single product layout
pub fn parse_detail_page(html: &str) -> Option<ProductRecord> {
    parse_single_product(&Html::parse_document(html))
}

fn single_product_layout(document: &Html, _base_url: &Url) -> Option<PageLayout> {
    parse_single_product(document).map(PageLayout::Product)
}

fn grid_layout(document: &Html, base_url: &Url) -> Option<PageLayout> {
    let detail_urls = parse_product_grid(document, base_url);
    if detail_urls.is_empty() {
        None
    } else {
        Some(PageLayout::Grid(detail_urls))
    }
}

/// Extracts a record from a single product page
///
/// Returns `None` unless both the product code and the price are found.
pub fn parse_single_product(document: &Html) -> Option<ProductRecord> {
    let invcode = extract_product_code(document)?;
    let price = extract_price(document)?;
    Some(ProductRecord { invcode, price })
}

/// Finds the label span and returns the text of the next sibling span
fn extract_product_code(document: &Html) -> Option<String> {
    let span_selector = Selector::parse("span").ok()?;

    let label = document
        .select(&span_selector)
        .find(|span| span.text().collect::<String>().contains(PRODUCT_CODE_LABEL))?;

    next_sibling_span(label)
        .map(stripped_text)
        .filter(|code| !code.is_empty())
}

/// Reads the price figure and its optional unit from the buy card
fn extract_price(document: &Html) -> Option<String> {
    let buy_card_selector = Selector::parse(&format!("#{}", BUY_CARD_ID)).ok()?;
    let span_selector = Selector::parse("span").ok()?;

    let buy_card = document.select(&buy_card_selector).next()?;
    let figure = buy_card.select(&span_selector).find(|span| {
        span.value()
            .classes()
            .any(|class| class.contains(PRICE_CLASS_MARKER))
    })?;

    let mut price = stripped_text(figure);
    if price.is_empty() {
        return None;
    }

    if let Some(unit) = next_sibling_span(figure) {
        price.push(' ');
        price.push_str(&stripped_text(unit));
    }

    Some(price)
}

/// Collects the absolute detail URLs of all product cards
///
/// Cards without an `a[title][href]` anchor, or whose href cannot be
/// resolved, are skipped.
pub fn parse_product_grid(document: &Html, base_url: &Url) -> Vec<Url> {
    let (Ok(card_selector), Ok(anchor_selector)) = (
        Selector::parse(CARD_SELECTOR),
        Selector::parse("a[title][href]"),
    ) else {
        return Vec::new();
    };

    document
        .select(&card_selector)
        .filter_map(|card| card.select(&anchor_selector).next())
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(|href| match base_url.join(href.trim()) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::debug!("Skipping card with unresolvable href '{}': {}", href, e);
                None
            }
        })
        .collect()
}

/// The next following sibling element that is a `span`
fn next_sibling_span(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == "span")
}

/// Concatenates the element's text fragments, each trimmed
fn stripped_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}
