//! Product Catalog Scanner
//!
//! Pulls title, price, image and variation out of a catalog entry when an
//! "add to cart" control fires. The UI crate implements [`CatalogEntry`] over
//! DOM elements; tests implement it over plain maps.

use crate::domain::{ProductDetails, DEFAULT_TITLE};

/// Heading holding the product title
pub const TITLE_SELECTOR: &str = "h3";
/// Entry attribute consulted when there is no usable heading
pub const TITLE_ATTRIBUTE: &str = "data-title";
/// Entry attribute carrying an optional size/color description
pub const VARIATION_ATTRIBUTE: &str = "data-variation";
pub const IMAGE_SELECTOR: &str = "img";

/// Class that marks a button as an add-to-cart control regardless of its label
pub const ADD_TO_CART_CLASS: &str = "add-to-cart";
const ADD_TO_CART_LABEL: &str = "add to cart";

/// Read access to one catalog entry's markup
pub trait CatalogEntry {
    /// Trimmed text of the first descendant matching `selector`
    fn text_of(&self, selector: &str) -> Option<String>;

    /// An attribute on the entry itself
    fn attr(&self, name: &str) -> Option<String>;

    /// An attribute on the first descendant matching `selector`
    fn attr_of(&self, selector: &str, name: &str) -> Option<String>;
}

/// One place a price may be found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceStrategy {
    /// Text of a descendant element
    Element(&'static str),
    /// An attribute on the entry
    Attribute(&'static str),
}

/// Price sources, tried in order; the first that yields a number wins.
///
/// 1. the emphasized price inside a paragraph (`<p><strong>$12</strong></p>`)
/// 2. any element classed `price`
/// 3. the entry's `data-price` attribute
pub const PRICE_STRATEGIES: [PriceStrategy; 3] = [
    PriceStrategy::Element("p strong"),
    PriceStrategy::Element(".price"),
    PriceStrategy::Attribute("data-price"),
];

impl PriceStrategy {
    pub fn extract<E: CatalogEntry + ?Sized>(&self, entry: &E) -> Option<f64> {
        let raw = match self {
            PriceStrategy::Element(selector) => entry.text_of(selector),
            PriceStrategy::Attribute(name) => entry.attr(name),
        }?;
        parse_price(&raw)
    }
}

/// Numeric value of currency text.
///
/// Everything but ASCII digits and `.` is dropped, then the longest leading
/// decimal (`12`, `12.5`, `.5`) is parsed. `"$1,299.00"` reads as `1299.0`;
/// `"1.2.3"` reads as `1.2`. Text without a digit yields `None`.
pub fn parse_price(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in cleaned.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + 1;
    }

    if !seen_digit {
        return None;
    }
    cleaned[..end].parse::<f64>().ok()
}

/// First price the ordered strategies can read, else 0
pub fn scan_price<E: CatalogEntry + ?Sized>(entry: &E) -> f64 {
    PRICE_STRATEGIES
        .iter()
        .find_map(|strategy| strategy.extract(entry))
        .unwrap_or(0.0)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Heading text, else the title attribute, else [`DEFAULT_TITLE`]
pub fn scan_title<E: CatalogEntry + ?Sized>(entry: &E) -> String {
    non_empty(entry.text_of(TITLE_SELECTOR))
        .or_else(|| non_empty(entry.attr(TITLE_ATTRIBUTE)))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// Extract everything an add-to-cart needs from one entry
pub fn scan_entry<E: CatalogEntry + ?Sized>(entry: &E) -> ProductDetails {
    ProductDetails {
        title: scan_title(entry),
        price: scan_price(entry),
        image: entry.attr_of(IMAGE_SELECTOR, "src").unwrap_or_default(),
        variation: non_empty(entry.attr(VARIATION_ATTRIBUTE)),
    }
}

/// Whether a clicked button is an add-to-cart control
pub fn is_add_to_cart_trigger(label: &str, has_trigger_class: bool) -> bool {
    has_trigger_class || label.trim().to_lowercase().contains(ADD_TO_CART_LABEL)
}

/// Notice shown after a successful add
pub fn added_notice(title: &str) -> String {
    format!("\"{}\" added to cart", title)
}
