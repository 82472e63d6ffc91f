//! Regular expressions shared by the address rules.

use std::sync::LazyLock;

use regex::Regex;

/// Street-type prefixes recognized at the start of an address fragment.
pub const STREET_TYPES: &[&str] = &[
    "Calle",
    "Avenida",
    r"Av\.?",
    "Carretera",
    r"Ctra\.?",
    "Plaza",
    "Paseo",
    "Ronda",
    "Travesía",
    "Camino",
    "C/",
];

/// A street-type prefix followed by at least one whitespace character.
static STREET_TYPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^(?:{})\s+", STREET_TYPES.join("|")))
        .expect("Invalid street type regex")
});

/// Standalone digit runs anywhere in the address.
static NUMBER_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+)\b").expect("Invalid number token regex"));

static NUMERIC_FRAGMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("Invalid numeric fragment regex"));

pub fn starts_with_street_type(fragment: &str) -> bool {
    STREET_TYPE_REGEX.is_match(fragment)
}

pub fn is_numeric(fragment: &str) -> bool {
    NUMERIC_FRAGMENT_REGEX.is_match(fragment)
}

/// First standalone number in `text`, if any.
pub fn first_number(text: &str) -> Option<&str> {
    NUMBER_TOKEN_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
