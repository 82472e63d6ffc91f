use crate::rules::{AddressRule, ParsedAddress, RULES};

/// Result of normalizing one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAddress {
    pub value: String,
    /// Rule that produced `value`; `None` for empty input.
    pub rule: Option<AddressRule>,
}

/// Reduce a reverse-geocoded address to "street [number]".
///
/// ```
/// use solar_normalization::normalize_address;
///
/// assert_eq!(
///     normalize_address("81, Calle José María Giles Ontiveros, Pardaleras, Badajoz"),
///     "Calle José María Giles Ontiveros 81"
/// );
/// ```
pub fn normalize_address(raw: &str) -> String {
    normalize_address_traced(raw).value
}

/// Same as [`normalize_address`], also reporting which rule fired.
pub fn normalize_address_traced(raw: &str) -> NormalizedAddress {
    if raw.is_empty() {
        return NormalizedAddress {
            value: String::new(),
            rule: None,
        };
    }
    let parsed = ParsedAddress::parse(raw);
    for rule in RULES {
        if let Some(value) = rule.apply(&parsed) {
            return NormalizedAddress {
                value,
                rule: Some(rule),
            };
        }
    }
    // FirstFragment always applies; kept for exhaustiveness.
    NormalizedAddress {
        value: raw.trim().to_string(),
        rule: None,
    }
}
