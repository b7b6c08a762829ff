//! Free-form price token canonicalization.

use std::sync::LazyLock;

use regex::Regex;

/// First maximal run of digits with embedded separators, e.g. `1.234,56`.
static NUMERIC_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:[.,]\d+)*").expect("valid numeric regex"));

/// Canonicalizes a raw price token into a plain decimal string.
///
/// Takes the first numeric run from the input (dropping currency symbols and
/// surrounding words) and replaces comma separators with periods, so
/// `"50,00 €"` becomes `"50.00"`. The replacement is blind: a
/// thousands-separated `"1.234,56"` becomes `"1.234.56"`, without locale
/// detection. Returns `None` when the input carries no digits.
#[must_use]
pub fn normalize_price(raw: &str) -> Option<String> {
    NUMERIC_RUN_RE
        .find(raw)
        .map(|m| m.as_str().replace(',', "."))
}

/// Whether a probed price value reads as a decimal number once currency
/// symbols and surrounding words are stripped.
///
/// Matches lenient `parseFloat`-style acceptance: after filtering to digits
/// and separators, the remainder must lead with a digit (or a period followed
/// by a digit). Values failing this check (e.g. `"Call for price"`) send the
/// price cascade into its regex-scan tier.
pub(crate) fn parses_as_decimal(raw: &str) -> bool {
    let stripped: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ','))
        .collect();
    let mut chars = stripped.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('.') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

#[cfg(test)]
#[path = "price_test.rs"]
mod tests;
