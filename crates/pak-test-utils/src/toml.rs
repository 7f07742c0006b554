//! Semantic TOML comparison.
//!
//! Persisted TOML carries no guaranteed key order, so tests compare parsed
//! tables instead of raw text.

use pretty_assertions::assert_eq;

/// Parse `text` as a TOML document.
///
/// # Panics
/// Panics with the offending text if parsing fails.
pub fn parse(text: &str) -> ::toml::Table {
    text.parse::<::toml::Table>()
        .unwrap_or_else(|e| panic!("invalid TOML: {e}\n---\n{text}"))
}

/// Assert that two TOML documents describe the same table.
pub fn assert_toml_eq(actual: &str, expected: &str) {
    assert_eq!(parse(actual), parse(expected));
}
