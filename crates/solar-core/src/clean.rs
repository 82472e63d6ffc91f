//! Address cleanup pass over an annotated collection.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use solar_ingest::{read_collection, write_collection};
use solar_model::FeatureCollection;
use solar_normalization::{AddressRule, normalize_address_traced};
use tracing::debug;

use crate::error::{Result, ensure_distinct_output};

/// Length of the original address shown in change samples.
const SAMPLE_PREFIX_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressChange {
    pub feature_index: usize,
    pub original: String,
    pub cleaned: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanReport {
    /// Features carrying a string `direccion`.
    pub total: usize,
    /// Addresses rewritten by the normalizer.
    pub modified: usize,
    /// How many addresses each rule produced.
    pub by_rule: BTreeMap<AddressRule, usize>,
    /// First rewrites, for display.
    pub samples: Vec<AddressChange>,
}

/// Normalize every `direccion` of `collection` in place.
pub fn clean_addresses(collection: &mut FeatureCollection, max_samples: usize) -> CleanReport {
    let mut report = CleanReport::default();

    for (feature_index, feature) in collection.features.iter_mut().enumerate() {
        let Some(original) = feature.address().map(str::to_string) else {
            continue;
        };
        report.total += 1;
        let normalized = normalize_address_traced(&original);
        if let Some(rule) = normalized.rule {
            *report.by_rule.entry(rule).or_default() += 1;
        }
        if normalized.value == original {
            continue;
        }

        debug!(
            feature_index,
            original = %truncate_chars(&original, SAMPLE_PREFIX_CHARS),
            cleaned = %normalized.value,
            "address cleaned"
        );
        if report.samples.len() < max_samples {
            report.samples.push(AddressChange {
                feature_index,
                original: truncate_chars(&original, SAMPLE_PREFIX_CHARS),
                cleaned: normalized.value.clone(),
            });
        }
        feature.set_address(normalized.value);
        report.modified += 1;
    }

    report
}

/// Read `input`, clean its addresses and write the result to `output`.
pub fn clean_file(input: &Path, output: &Path, max_samples: usize) -> Result<CleanReport> {
    ensure_distinct_output(input, output)?;
    let mut collection = read_collection(input)?;
    let report = clean_addresses(&mut collection, max_samples);
    write_collection(output, &collection)?;
    Ok(report)
}

/// The first `max` characters of `text`, with `...` appended when cut.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
