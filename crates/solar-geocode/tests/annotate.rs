//! Annotation runs against an in-memory geocoder.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use serde_json::json;
use solar_geocode::{
    Annotator, FeatureOutcome, GeocodeError, INVALID_COORDINATES, NO_ADDRESS_FOUND,
    ReverseGeocoder, Throttle,
};
use solar_model::{AnnotateOptions, FeatureCollection, LatLng};

/// Answers from a script, one entry per request, and records the points.
struct ScriptedGeocoder {
    answers: RefCell<Vec<Result<Option<String>, GeocodeError>>>,
    points: RefCell<Vec<LatLng>>,
}

impl ScriptedGeocoder {
    fn new(mut answers: Vec<Result<Option<String>, GeocodeError>>) -> Self {
        answers.reverse();
        Self {
            answers: RefCell::new(answers),
            points: RefCell::new(Vec::new()),
        }
    }
}

impl ReverseGeocoder for ScriptedGeocoder {
    fn reverse(&self, point: LatLng) -> Result<Option<String>, GeocodeError> {
        self.points.borrow_mut().push(point);
        self.answers
            .borrow_mut()
            .pop()
            .unwrap_or_else(|| Err(GeocodeError::Other("script exhausted".into())))
    }
}

#[derive(Default)]
struct CountingThrottle {
    pauses: Cell<usize>,
    last: Cell<Duration>,
}

impl Throttle for CountingThrottle {
    fn pause(&self, delay: Duration) {
        self.pauses.set(self.pauses.get() + 1);
        self.last.set(delay);
    }
}

fn square(offset: f64) -> serde_json::Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[offset, offset], [offset, offset + 2.0], [offset + 2.0, offset + 2.0], [offset + 2.0, offset]]]
        },
        "properties": {"id": offset}
    })
}

fn collection(features: Vec<serde_json::Value>) -> FeatureCollection {
    serde_json::from_value(json!({"type": "FeatureCollection", "features": features})).unwrap()
}

#[test]
fn annotates_each_feature_with_its_outcome() {
    let mut collection = collection(vec![
        square(0.0),
        json!({"type": "Feature", "geometry": {"type": "Polygon", "coordinates": [[]]}, "properties": {}}),
        square(10.0),
        square(20.0),
        json!({"type": "Feature", "properties": {}}),
    ]);
    let geocoder = ScriptedGeocoder::new(vec![
        Ok(Some("81, Calle Mayor, Badajoz, 06011, España".to_string())),
        Ok(None),
        Err(GeocodeError::Service("HTTP 503 Service Unavailable".into())),
    ]);
    let throttle = CountingThrottle::default();
    let options = AnnotateOptions::default().with_request_delay(Duration::from_millis(5));
    let annotator = Annotator::new(&geocoder, options).with_throttle(&throttle);

    let mut seen = Vec::new();
    let stats = annotator.annotate(&mut collection, |index, outcome| seen.push((index, outcome)));

    let addresses: Vec<&str> = collection
        .features
        .iter()
        .map(|f| f.address().unwrap())
        .collect();
    assert_eq!(
        addresses,
        [
            "81, Calle Mayor, Badajoz, 06011, España",
            INVALID_COORDINATES,
            NO_ADDRESS_FOUND,
            "Error API: service error: HTTP 503 Servic",
            "Error coordenadas: missing geometry coordinates",
        ]
    );
    assert_eq!(
        seen,
        [
            (0, FeatureOutcome::Success),
            (1, FeatureOutcome::InvalidCoordinates),
            (2, FeatureOutcome::NoAddress),
            (3, FeatureOutcome::GeocodeFailed),
            (4, FeatureOutcome::InvalidCoordinates),
        ]
    );
    assert_eq!(stats.total, 5);
    assert_eq!(stats.success, 1);
    assert_eq!(stats.no_address, 1);
    assert_eq!(stats.errors(), 3);

    // Only features that reached the provider are paced.
    assert_eq!(throttle.pauses.get(), 3);
    assert_eq!(throttle.last.get(), Duration::from_millis(5));
    assert_eq!(
        geocoder.points.borrow().as_slice(),
        [
            LatLng::new(1.0, 1.0),
            LatLng::new(11.0, 11.0),
            LatLng::new(21.0, 21.0)
        ]
    );
}

#[test]
fn keeps_other_properties() {
    let mut collection = collection(vec![square(0.0)]);
    let geocoder = ScriptedGeocoder::new(vec![Ok(Some("Calle Real 5".to_string()))]);
    let annotator = Annotator::new(&geocoder, AnnotateOptions::default())
        .with_throttle(CountingThrottle::default());

    annotator.annotate(&mut collection, |_, _| {});

    let properties = collection.features[0].properties().unwrap();
    assert_eq!(properties["id"], json!(0.0));
    assert_eq!(properties["direccion"], json!("Calle Real 5"));
}

#[test]
fn normalizes_when_requested() {
    let mut collection = collection(vec![square(0.0)]);
    let geocoder = ScriptedGeocoder::new(vec![Ok(Some(
        "81, Calle José María Giles Ontiveros, Pardaleras, Badajoz, 06011, España".to_string(),
    ))]);
    let options = AnnotateOptions::default().with_normalize(true);
    let annotator =
        Annotator::new(&geocoder, options).with_throttle(CountingThrottle::default());

    let stats = annotator.annotate(&mut collection, |_, _| {});

    assert_eq!(stats.success, 1);
    assert_eq!(
        collection.features[0].address(),
        Some("Calle José María Giles Ontiveros 81")
    );
}

#[test]
fn empty_collection_sends_no_requests() {
    let mut collection = collection(Vec::new());
    let geocoder = ScriptedGeocoder::new(Vec::new());
    let throttle = CountingThrottle::default();
    let annotator =
        Annotator::new(&geocoder, AnnotateOptions::default()).with_throttle(&throttle);

    let stats = annotator.annotate(&mut collection, |_, _| {});

    assert_eq!(stats.total, 0);
    assert_eq!(throttle.pauses.get(), 0);
    assert!(geocoder.points.borrow().is_empty());
}

#[test]
fn non_object_entries_are_left_verbatim() {
    let mut collection = collection(vec![json!(null), square(0.0)]);
    let geocoder = ScriptedGeocoder::new(vec![Ok(Some("Calle Real 5".to_string()))]);
    let throttle = CountingThrottle::default();
    let annotator =
        Annotator::new(&geocoder, AnnotateOptions::default()).with_throttle(&throttle);

    let stats = annotator.annotate(&mut collection, |_, _| {});

    assert_eq!(stats.invalid_coordinates, 1);
    assert_eq!(stats.success, 1);
    assert_eq!(collection.features[0].as_value(), &json!(null));
    assert_eq!(collection.features[1].address(), Some("Calle Real 5"));
    assert_eq!(throttle.pauses.get(), 1);
}
