//! Listing extraction from result-page markup
//!
//! A result page is a list of `li.result-row` containers. Each container is
//! expected to hold a `.result-info` block, inside it a `.result-meta` block
//! with `.result-price` and `.housing` elements, and an `a.result-image`
//! anchor carrying the listing href. Heterogeneous markup is routine:
//! containers missing any of those pieces are skipped silently, without
//! affecting the rest of the page.

use scraper::{ElementRef, Html, Selector};

/// One extracted listing
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Monthly rent in dollars
    pub rent: f64,

    /// Floor space in square feet
    pub space: u32,

    /// Listing URL as found in the page (absolute or relative)
    pub link: String,

    /// Rent divided by space, rounded to cents
    pub price_per_sqft: f64,
}

impl Listing {
    /// Builds a listing from its raw parts
    ///
    /// Returns `None` unless rent is positive and space is non-zero; the
    /// derived metric is undefined otherwise.
    pub fn new(rent: f64, space: u32, link: String) -> Option<Self> {
        if rent <= 0.0 || space == 0 {
            return None;
        }

        let price_per_sqft = round_to_cents(rent / space as f64);

        Some(Self {
            rent,
            space,
            link,
            price_per_sqft,
        })
    }
}

/// Compiled selectors for the listing container structure
struct Selectors {
    row: Selector,
    info: Selector,
    meta: Selector,
    price: Selector,
    housing: Selector,
    link: Selector,
}

impl Selectors {
    fn compile() -> Option<Self> {
        Some(Self {
            row: Selector::parse("li.result-row").ok()?,
            info: Selector::parse(".result-info").ok()?,
            meta: Selector::parse(".result-meta").ok()?,
            price: Selector::parse(".result-price").ok()?,
            housing: Selector::parse(".housing").ok()?,
            link: Selector::parse("a.result-image").ok()?,
        })
    }
}

/// Extracts all well-formed listings from one result page
///
/// Malformed containers contribute nothing; this function never fails
/// wholesale for one bad entry within an otherwise-valid page.
pub fn extract_listings(html: &str) -> Vec<Listing> {
    let selectors = match Selectors::compile() {
        Some(selectors) => selectors,
        None => return Vec::new(),
    };

    let document = Html::parse_document(html);

    document
        .select(&selectors.row)
        .filter_map(|row| extract_listing(row, &selectors))
        .collect()
}

/// Extracts a single listing from its container element
///
/// Every `?` here is a skip: a container missing any piece of the expected
/// structure yields no record rather than a zeroed one.
fn extract_listing(row: ElementRef, selectors: &Selectors) -> Option<Listing> {
    let info = row.select(&selectors.info).next()?;
    let meta = info.select(&selectors.meta).next()?;
    let price = meta.select(&selectors.price).next()?;
    let housing = meta.select(&selectors.housing).next()?;
    let anchor = row.select(&selectors.link).next()?;

    let rent = parse_rent(&element_text(price))?;
    let space = parse_space(&element_text(housing))?;

    let link = anchor.value().attr("href")?.trim();
    if link.is_empty() {
        return None;
    }

    Listing::new(rent, space, link.to_string())
}

/// Collects the text content of an element
fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

/// Parses a price string like "$2500" into whole dollars
fn parse_rent(text: &str) -> Option<f64> {
    leading_digits(text.trim().trim_start_matches('$'))
        .parse::<u32>()
        .ok()
        .map(f64::from)
}

/// Parses a housing string like "1000ft2 -" into square feet
fn parse_space(text: &str) -> Option<u32> {
    leading_digits(text.trim()).parse::<u32>().ok()
}

/// Returns the leading ASCII-digit prefix of a string
fn leading_digits(text: &str) -> &str {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    &text[..end]
}

/// Rounds a derived dollar metric to two decimal places
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
