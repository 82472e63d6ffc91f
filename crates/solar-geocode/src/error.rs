//! Error types for centroid computation and reverse geocoding.

use thiserror::Error;

/// Why a feature's geometry cannot produce a centroid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CentroidError {
    /// The feature has no `geometry.coordinates` member.
    #[error("missing geometry coordinates")]
    MissingCoordinates,

    /// The outer ring is absent or has no points.
    #[error("outer ring is empty")]
    EmptyRing,

    /// The outer ring is not an array of positions.
    #[error("outer ring is not an array")]
    MalformedRing,

    /// A position is not a `[longitude, latitude, ...]` number array.
    #[error("position {index} is not a [longitude, latitude] pair")]
    MalformedPosition { index: usize },
}

/// Failures reported by a reverse geocoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GeocodeError {
    /// The request did not complete within the configured timeout.
    #[error("service timed out: {0}")]
    Timeout(String),

    /// The provider was unreachable or answered with an error status.
    #[error("service error: {0}")]
    Service(String),

    /// Anything else (bad response body, client setup failure, ...).
    #[error("{0}")]
    Other(String),
}

impl GeocodeError {
    /// Returns whether the provider itself reported the failure (as opposed
    /// to an unexpected local error).
    #[must_use]
    pub fn is_provider_fault(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Service(_))
    }
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() || err.is_request() || err.is_status() {
            Self::Service(err.to_string())
        } else {
            Self::Other(err.to_string())
        }
    }
}

/// Result type alias for geocoding operations.
pub type Result<T> = std::result::Result<T, GeocodeError>;
