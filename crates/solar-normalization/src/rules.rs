//! Ordered rule table for address normalization.
//!
//! Rules are evaluated in [`RULES`] order and the first one returning a value
//! wins. [`AddressRule::FirstFragment`] always applies, so the table is total.

use std::fmt;

use serde::Serialize;

use crate::patterns::{is_numeric, starts_with_street_type};

/// A raw address split into its comma-separated fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAddress<'a> {
    /// Trimmed fragments in source order; never empty.
    pub fragments: Vec<&'a str>,
    /// First standalone number found anywhere in the raw address.
    pub number: Option<&'a str>,
}

impl<'a> ParsedAddress<'a> {
    pub fn parse(raw: &'a str) -> Self {
        Self {
            fragments: raw.split(',').map(str::trim).collect(),
            number: crate::patterns::first_number(raw),
        }
    }

    fn first(&self) -> &'a str {
        self.fragments.first().copied().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressRule {
    /// `"81, Calle X, ..."` becomes `"Calle X 81"`.
    LeadingNumber,
    /// A street-type fragment among the first two, plus a number if one can
    /// be attributed to it.
    StreetFragment,
    /// The first fragment, plus the address number when it is not already there.
    FirstFragment,
}

/// Evaluation order of the rules.
pub const RULES: [AddressRule; 3] = [
    AddressRule::LeadingNumber,
    AddressRule::StreetFragment,
    AddressRule::FirstFragment,
];

impl AddressRule {
    pub fn id(self) -> &'static str {
        match self {
            Self::LeadingNumber => "leading-number",
            Self::StreetFragment => "street-fragment",
            Self::FirstFragment => "first-fragment",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::LeadingNumber => "number first, street in the second fragment",
            Self::StreetFragment => "street type in one of the first two fragments",
            Self::FirstFragment => "no street type recognized, keep first fragment",
        }
    }

    /// Returns the normalized address when the rule applies.
    pub fn apply(self, address: &ParsedAddress<'_>) -> Option<String> {
        match self {
            Self::LeadingNumber => leading_number(address),
            Self::StreetFragment => street_fragment(address),
            Self::FirstFragment => Some(first_fragment(address)),
        }
    }
}

impl fmt::Display for AddressRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

fn leading_number(address: &ParsedAddress<'_>) -> Option<String> {
    let [number, street, ..] = address.fragments.as_slice() else {
        return None;
    };
    if !is_numeric(number) {
        return None;
    }
    if street.is_empty() {
        Some((*number).to_string())
    } else {
        Some(format!("{street} {number}"))
    }
}

fn street_fragment(address: &ParsedAddress<'_>) -> Option<String> {
    let fragments = &address.fragments;
    let (index, street) = fragments
        .iter()
        .take(2)
        .enumerate()
        .find(|(_, fragment)| starts_with_street_type(fragment))?;

    if let Some(next) = fragments.get(index + 1).filter(|next| is_numeric(next)) {
        return Some(format!("{street} {next}"));
    }
    if let Some(number) = address.number.filter(|number| !street.contains(number)) {
        return Some(format!("{street} {number}"));
    }
    Some((*street).to_string())
}

fn first_fragment(address: &ParsedAddress<'_>) -> String {
    let first = address.first();
    match address.number {
        Some(number) if !first.contains(number) && !is_numeric(first) => {
            format!("{first} {number}")
        }
        _ => first.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(rule: AddressRule, raw: &str) -> Option<String> {
        rule.apply(&ParsedAddress::parse(raw))
    }

    #[test]
    fn parse_trims_fragments_and_finds_number() {
        let parsed = ParsedAddress::parse(" 12 , Calle Sol ,Mérida");
        assert_eq!(parsed.fragments, ["12", "Calle Sol", "Mérida"]);
        assert_eq!(parsed.number, Some("12"));
    }

    #[test]
    fn leading_number_rule() {
        assert_eq!(
            apply(AddressRule::LeadingNumber, "5, Avenida de Elvas, Badajoz"),
            Some("Avenida de Elvas 5".to_string())
        );
        // Applies even when the second fragment has no street type.
        assert_eq!(
            apply(AddressRule::LeadingNumber, "5, Urbanización Guadiana"),
            Some("Urbanización Guadiana 5".to_string())
        );
        assert_eq!(
            apply(AddressRule::LeadingNumber, "5, , Badajoz"),
            Some("5".to_string())
        );
        assert_eq!(apply(AddressRule::LeadingNumber, "5"), None);
        assert_eq!(apply(AddressRule::LeadingNumber, "Calle Sol, 5"), None);
    }

    #[test]
    fn street_fragment_takes_following_number() {
        assert_eq!(
            apply(AddressRule::StreetFragment, "Calle Sol, 14, Badajoz, 06001"),
            Some("Calle Sol 14".to_string())
        );
    }

    #[test]
    fn street_fragment_uses_candidate_number() {
        assert_eq!(
            apply(AddressRule::StreetFragment, "Barrio Alto, Plaza Alta, Badajoz, 06001"),
            Some("Plaza Alta 06001".to_string())
        );
    }

    #[test]
    fn street_fragment_skips_number_already_in_street() {
        assert_eq!(
            apply(AddressRule::StreetFragment, "Calle 2 de Mayo, Badajoz"),
            Some("Calle 2 de Mayo".to_string())
        );
    }

    #[test]
    fn street_fragment_only_checks_first_two_fragments() {
        assert_eq!(
            apply(AddressRule::StreetFragment, "Alvarado, Badajoz, Calle Sol"),
            None
        );
    }

    #[test]
    fn first_fragment_rule() {
        assert_eq!(
            apply(AddressRule::FirstFragment, "Polígono El Nevero, 06006"),
            Some("Polígono El Nevero 06006".to_string())
        );
        assert_eq!(
            apply(AddressRule::FirstFragment, "Finca 12, Badajoz"),
            Some("Finca 12".to_string())
        );
        assert_eq!(
            apply(AddressRule::FirstFragment, "Alvarado"),
            Some("Alvarado".to_string())
        );
        assert_eq!(apply(AddressRule::FirstFragment, "7"), Some("7".to_string()));
    }

    #[test]
    fn rule_ids_are_unique() {
        let mut ids: Vec<&str> = RULES.iter().map(|rule| rule.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), RULES.len());
    }
}
