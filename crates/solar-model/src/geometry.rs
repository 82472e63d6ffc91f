use std::fmt;

use serde::{Deserialize, Serialize};

/// A WGS84 point in latitude/longitude order, as geocoders expect it.
///
/// GeoJSON positions are `[longitude, latitude]`; convert with
/// [`LatLng::from_position`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn from_position(lng: f64, lat: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lng)
    }
}
