//! Ordered extraction strategies for each metadata field.
//!
//! Every field is derived from a literal priority list evaluated lazily: the
//! first strategy producing a non-blank value wins, with no merging or
//! scoring. Tie-break order is load-bearing and covered by tests.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::Document;
use crate::price::{normalize_price, parses_as_decimal};

const TITLE_META_KEYS: [&str; 2] = ["og:title", "twitter:title"];

const DESCRIPTION_META_KEYS: [&str; 3] =
    ["og:description", "twitter:description", "description"];

const IMAGE_META_KEYS: [&str; 3] = ["og:image", "twitter:image", "twitter:image:src"];

/// Structural fallbacks for retail pages that ship no social metadata: a
/// primary product image, a books cover, a generic main image, and a dynamic
/// image whose high-resolution URL lives in a data attribute rather than
/// `src`.
const IMAGE_FALLBACK_SELECTORS: [(&str, &str); 4] = [
    ("#landingImage", "src"),
    ("#imgBlkFront", "src"),
    ("#main-image", "src"),
    (".a-dynamic-image", "data-old-hires"),
];

const PRICE_META_KEYS: [&str; 3] = ["product:price:amount", "price", "og:price:amount"];

/// Known e-commerce layout patterns, probed in fixed priority order: current
/// price, two legacy/deal price ids, then a generic price class.
const PRICE_SELECTORS: [&str; 4] = [
    ".a-price .a-offscreen",
    "#priceblock_ourprice",
    "#priceblock_dealprice",
    ".price",
];

/// Currency-prefixed (`$12.50`) or currency-suffixed (`12,50 €`) token.
static PRICE_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[$€£]\s*\d+[.,]?\d*|\d+[.,]?\d*\s*[$€£]").expect("valid price token regex")
});

/// Page title: Open Graph, then Twitter Card, then the `<title>` element.
#[must_use]
pub fn extract_title(doc: &Document) -> Option<String> {
    TITLE_META_KEYS
        .iter()
        .find_map(|key| doc.meta_content(key))
        .or_else(|| doc.text_of("title"))
}

/// Page description: Open Graph, Twitter Card, then the generic meta name.
#[must_use]
pub fn extract_description(doc: &Document) -> Option<String> {
    DESCRIPTION_META_KEYS
        .iter()
        .find_map(|key| doc.meta_content(key))
}

/// Representative image: social metadata tags first, then `link[rel=image_src]`,
/// then structural fallbacks for pages without Open Graph support.
///
/// The returned value may be relative; absolutization is the caller's job.
#[must_use]
pub fn extract_image(doc: &Document) -> Option<String> {
    IMAGE_META_KEYS
        .iter()
        .find_map(|key| doc.meta_content(key))
        .or_else(|| doc.attr_of(r#"link[rel="image_src"]"#, "href"))
        .or_else(|| {
            IMAGE_FALLBACK_SELECTORS
                .iter()
                .find_map(|(selector, attr)| doc.attr_of(selector, attr))
        })
}

/// Price cascade: meta-tag probes, then layout-selector probes, then a regex
/// scan as a last resort.
///
/// The scan runs when the probes miss entirely or produce a value that does
/// not read as a decimal number, and searches the probed value, the extracted
/// title, and the extracted description — marketplace listings often echo the
/// price only in the page title. Whatever raw token survives goes through
/// [`normalize_price`]; no numeric content means the field is absent.
#[must_use]
pub fn extract_price(doc: &Document, title: &str, description: &str) -> Option<String> {
    let probed = PRICE_META_KEYS
        .iter()
        .find_map(|key| doc.meta_content(key))
        .or_else(|| {
            PRICE_SELECTORS
                .iter()
                .find_map(|selector| doc.text_of(selector))
        });

    let raw = match probed {
        Some(value) if parses_as_decimal(&value) => Some(value),
        other => {
            let haystack = format!("{} {title} {description}", other.as_deref().unwrap_or(""));
            PRICE_TOKEN_RE
                .find(&haystack)
                .map(|m| {
                    tracing::debug!(token = m.as_str(), "price recovered via text scan");
                    m.as_str().to_owned()
                })
                .or(other)
        }
    };

    raw.as_deref().and_then(normalize_price)
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;
