use super::*;

#[test]
fn normalize_price_strips_currency_prefix() {
    assert_eq!(normalize_price("$49.99").as_deref(), Some("49.99"));
}

#[test]
fn normalize_price_strips_currency_suffix_and_words() {
    assert_eq!(normalize_price("Nur 12,50 € heute").as_deref(), Some("12.50"));
}

#[test]
fn normalize_price_replaces_comma_decimal_separator() {
    assert_eq!(normalize_price("50,00").as_deref(), Some("50.00"));
}

#[test]
fn normalize_price_thousands_separator_is_replaced_blindly() {
    // Known limitation: no locale detection, the comma is replaced verbatim.
    assert_eq!(normalize_price("1.234,56").as_deref(), Some("1.234.56"));
    assert_eq!(normalize_price("USD 1,299.00").as_deref(), Some("1.299.00"));
}

#[test]
fn normalize_price_takes_first_numeric_run() {
    assert_eq!(normalize_price("was $60, now $45.00").as_deref(), Some("60"));
}

#[test]
fn normalize_price_absent_without_digits() {
    assert!(normalize_price("call for price").is_none());
    assert!(normalize_price("").is_none());
    assert!(normalize_price("$ — ").is_none());
}

#[test]
fn parses_as_decimal_accepts_symbol_wrapped_numbers() {
    assert!(parses_as_decimal("$19.99"));
    assert!(parses_as_decimal("12,50 €"));
    assert!(parses_as_decimal("19.99"));
    assert!(parses_as_decimal(".50"));
}

#[test]
fn parses_as_decimal_rejects_unnumeric_text() {
    assert!(!parses_as_decimal("Call for price"));
    assert!(!parses_as_decimal(""));
    assert!(!parses_as_decimal("$"));
    assert!(!parses_as_decimal(",.."));
}
