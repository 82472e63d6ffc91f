//! Integration tests for the address cleanup pass.

use std::fs;

use serde_json::{Value, json};
use solar_core::{CoreError, clean_addresses, clean_file};
use solar_ingest::read_collection;
use solar_model::{Feature, FeatureCollection};
use solar_normalization::AddressRule;
use tempfile::TempDir;

const LONG_ADDRESS: &str =
    "81, Calle José María Giles Ontiveros, Pardaleras, Badajoz, 06011, España";

fn with_address(address: &str) -> Value {
    json!({"type": "Feature", "properties": {"id": 1, "direccion": address}})
}

fn source() -> Value {
    json!({
        "type": "FeatureCollection",
        "name": "direcciones",
        "features": [
            with_address(LONG_ADDRESS),
            with_address("Calle Dolores Marabe, Urbanización Guadiana, Badajoz"),
            with_address("Calle Real 5"),
            with_address("Carretera de Talavera la Real a La Albuera, Alvarado"),
            {"type": "Feature", "geometry": null},
            {"type": "Feature", "properties": {"id": 9}},
            {"type": "Feature", "properties": {"direccion": 12}},
            null
        ]
    })
}

fn collection() -> FeatureCollection {
    serde_json::from_value(source()).unwrap()
}

#[test]
fn counts_totals_modifications_and_rules() {
    let mut collection = collection();

    let report = clean_addresses(&mut collection, 10);

    assert_eq!(report.total, 4);
    assert_eq!(report.modified, 3);
    assert_eq!(report.by_rule.get(&AddressRule::LeadingNumber), Some(&1));
    assert_eq!(report.by_rule.get(&AddressRule::StreetFragment), Some(&3));
    assert_eq!(report.by_rule.get(&AddressRule::FirstFragment), None);

    let addresses: Vec<Option<&str>> = collection.features.iter().map(Feature::address).collect();
    assert_eq!(
        addresses[..4],
        [
            Some("Calle José María Giles Ontiveros 81"),
            Some("Calle Dolores Marabe"),
            Some("Calle Real 5"),
            Some("Carretera de Talavera la Real a La Albuera"),
        ]
    );
}

#[test]
fn already_clean_address_is_not_a_change() {
    let mut collection: FeatureCollection = serde_json::from_value(json!({
        "type": "FeatureCollection",
        "features": [with_address("Calle Real 5"), with_address("C/ Menacho 4")]
    }))
    .unwrap();

    let report = clean_addresses(&mut collection, 10);

    assert_eq!(report.total, 2);
    assert_eq!(report.modified, 0);
    assert!(report.samples.is_empty());
}

#[test]
fn features_without_string_address_are_untouched() {
    let mut collection = collection();

    clean_addresses(&mut collection, 10);

    let expected = source();
    for index in 4..8 {
        assert_eq!(
            collection.features[index].as_value(),
            &expected["features"][index],
            "feature {index} changed"
        );
    }
}

#[test]
fn samples_are_capped_and_truncated() {
    let mut collection = collection();

    let report = clean_addresses(&mut collection, 2);

    assert_eq!(report.modified, 3);
    assert_eq!(report.samples.len(), 2);
    let first = &report.samples[0];
    assert_eq!(first.feature_index, 0);
    let prefix: String = LONG_ADDRESS.chars().take(50).collect();
    assert_eq!(first.original, format!("{prefix}..."));
    assert_eq!(first.cleaned, "Calle José María Giles Ontiveros 81");
    assert_eq!(report.samples[1].feature_index, 1);
}

#[test]
fn clean_file_writes_cleaned_copy() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("badajoz-direcciones.geojson");
    let output = dir.path().join("badajoz-direcciones_opt.geojson");
    fs::write(&input, serde_json::to_string(&source()).unwrap()).unwrap();

    let report = clean_file(&input, &output, 5).unwrap();

    assert_eq!(report.modified, 3);
    let written = read_collection(&output).unwrap();
    assert_eq!(written.metadata()["name"], json!("direcciones"));
    assert_eq!(written.features[1].address(), Some("Calle Dolores Marabe"));
    let untouched: Value = serde_json::from_str(&fs::read_to_string(&input).unwrap()).unwrap();
    assert_eq!(untouched, source());
}

#[test]
fn clean_file_refuses_to_overwrite_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("direcciones.geojson");
    let original = serde_json::to_string(&source()).unwrap();
    fs::write(&input, &original).unwrap();

    let err = clean_file(&input, &input, 5).unwrap_err();

    assert!(matches!(err, CoreError::OutputIsInput { .. }));
    assert_eq!(fs::read_to_string(&input).unwrap(), original);
}
