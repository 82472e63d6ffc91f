//! Reverse geocoding of solar-potential polygons.
//!
//! For each polygon feature the centroid of its outer ring is sent to a
//! [`ReverseGeocoder`] and the answer is stored in the feature's
//! `direccion` property. Requests are paced by a [`Throttle`].

pub mod annotate;
pub mod centroid;
pub mod error;
pub mod nominatim;
pub mod provider;
pub mod throttle;

pub use annotate::{
    AnnotateStats, Annotator, ERROR_MESSAGE_CHARS, FeatureOutcome, INVALID_COORDINATES,
    NO_ADDRESS_FOUND, error_status, estimated_duration,
};
pub use centroid::polygon_centroid;
pub use error::{CentroidError, GeocodeError, Result};
pub use nominatim::{
    DEFAULT_ENDPOINT, DEFAULT_USER_AGENT, NominatimClient, NominatimConfig, ReverseResponse,
};
pub use provider::ReverseGeocoder;
pub use throttle::{ThreadSleep, Throttle};
