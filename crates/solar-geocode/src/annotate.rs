//! Per-feature address annotation.
//!
//! Every feature receives a `direccion` property: the geocoded address on
//! success, otherwise one of the status strings below. A single feature's
//! failure never stops the run.

use std::time::Duration;

use serde::Serialize;
use solar_model::{AnnotateOptions, Feature, FeatureCollection};
use solar_normalization::normalize_address;
use tracing::{debug, warn};

use crate::centroid::polygon_centroid;
use crate::error::{CentroidError, GeocodeError};
use crate::provider::ReverseGeocoder;
use crate::throttle::{ThreadSleep, Throttle};

/// Written when the outer ring yields no centroid.
pub const INVALID_COORDINATES: &str = "Coordenadas inválidas";

/// Written when the provider knows no address at the centroid.
pub const NO_ADDRESS_FOUND: &str = "Sin dirección encontrada";

/// Characters of an error message kept in the status string.
pub const ERROR_MESSAGE_CHARS: usize = 30;

/// What happened to one feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureOutcome {
    /// An address was found and stored.
    Success,
    NoAddress,
    /// The geometry was missing or malformed. No request was sent.
    InvalidCoordinates,
    /// The provider failed (timeout, service error or other).
    GeocodeFailed,
}

impl FeatureOutcome {
    pub fn is_error(self) -> bool {
        matches!(self, Self::InvalidCoordinates | Self::GeocodeFailed)
    }

    /// Whether a request was sent to the provider.
    pub fn requested(self) -> bool {
        !matches!(self, Self::InvalidCoordinates)
    }
}

/// Counters for an annotation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnnotateStats {
    pub total: usize,
    pub success: usize,
    pub no_address: usize,
    pub invalid_coordinates: usize,
    pub geocode_errors: usize,
}

impl AnnotateStats {
    pub fn record(&mut self, outcome: FeatureOutcome) {
        self.total += 1;
        match outcome {
            FeatureOutcome::Success => self.success += 1,
            FeatureOutcome::NoAddress => self.no_address += 1,
            FeatureOutcome::InvalidCoordinates => self.invalid_coordinates += 1,
            FeatureOutcome::GeocodeFailed => self.geocode_errors += 1,
        }
    }

    /// Features that ended in any error status.
    pub fn errors(&self) -> usize {
        self.invalid_coordinates + self.geocode_errors
    }
}

/// Lower bound on run time when every feature needs a request.
pub fn estimated_duration(features: usize, delay: Duration) -> Duration {
    delay.saturating_mul(u32::try_from(features).unwrap_or(u32::MAX))
}

/// Drives a geocoder over a collection, pacing requests with a throttle.
#[derive(Debug)]
pub struct Annotator<G, T = ThreadSleep> {
    geocoder: G,
    throttle: T,
    options: AnnotateOptions,
}

impl<G: ReverseGeocoder> Annotator<G, ThreadSleep> {
    pub fn new(geocoder: G, options: AnnotateOptions) -> Self {
        Self {
            geocoder,
            throttle: ThreadSleep,
            options,
        }
    }
}

impl<G: ReverseGeocoder, T: Throttle> Annotator<G, T> {
    /// Replaces the pacing strategy.
    pub fn with_throttle<U: Throttle>(self, throttle: U) -> Annotator<G, U> {
        Annotator {
            geocoder: self.geocoder,
            throttle,
            options: self.options,
        }
    }

    pub fn options(&self) -> &AnnotateOptions {
        &self.options
    }

    /// Annotates one feature and waits the configured delay if a request
    /// was sent.
    pub fn annotate_feature(&self, feature: &mut Feature) -> FeatureOutcome {
        // Nothing can be stored on a `null` or scalar entry; keep it as is.
        if !feature.is_object() {
            debug!("feature is not an object");
            return FeatureOutcome::InvalidCoordinates;
        }
        let point = match feature
            .coordinates()
            .ok_or(CentroidError::MissingCoordinates)
            .and_then(polygon_centroid)
        {
            Ok(point) => point,
            Err(CentroidError::MissingCoordinates) => {
                let message = CentroidError::MissingCoordinates.to_string();
                feature.set_address(format!(
                    "Error coordenadas: {}",
                    leading_chars(&message, ERROR_MESSAGE_CHARS)
                ));
                return FeatureOutcome::InvalidCoordinates;
            }
            Err(err) => {
                debug!(error = %err, "no centroid");
                feature.set_address(INVALID_COORDINATES);
                return FeatureOutcome::InvalidCoordinates;
            }
        };

        let outcome = match self.geocoder.reverse(point) {
            Ok(Some(address)) => {
                let address = if self.options.normalize {
                    normalize_address(&address)
                } else {
                    address
                };
                debug!(%point, %address, "address found");
                feature.set_address(address);
                FeatureOutcome::Success
            }
            Ok(None) => {
                debug!(%point, "no address");
                feature.set_address(NO_ADDRESS_FOUND);
                FeatureOutcome::NoAddress
            }
            Err(err) => {
                warn!(%point, error = %err, "geocoding failed");
                feature.set_address(error_status(&err));
                FeatureOutcome::GeocodeFailed
            }
        };

        self.throttle.pause(self.options.request_delay);
        outcome
    }

    /// Annotates every feature in order. `on_feature` is called after each
    /// one with its index and outcome.
    pub fn annotate(
        &self,
        collection: &mut FeatureCollection,
        mut on_feature: impl FnMut(usize, FeatureOutcome),
    ) -> AnnotateStats {
        let mut stats = AnnotateStats::default();
        for (index, feature) in collection.features.iter_mut().enumerate() {
            let outcome = self.annotate_feature(feature);
            stats.record(outcome);
            on_feature(index, outcome);
        }
        stats
    }
}

/// Status string stored for a provider failure.
pub fn error_status(err: &GeocodeError) -> String {
    let message = err.to_string();
    let message = leading_chars(&message, ERROR_MESSAGE_CHARS);
    if err.is_provider_fault() {
        format!("Error API: {message}")
    } else {
        format!("Error: {message}")
    }
}

fn leading_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
