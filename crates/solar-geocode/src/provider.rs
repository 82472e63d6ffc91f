//! Reverse geocoding provider abstraction.

use solar_model::LatLng;

use crate::error::Result;

/// A service that resolves a point to a human-readable address.
///
/// `Ok(None)` means the provider answered but knows no address at that
/// point; it is not an error.
pub trait ReverseGeocoder {
    /// Looks up the address closest to `point`.
    fn reverse(&self, point: LatLng) -> Result<Option<String>>;
}

impl<G: ReverseGeocoder + ?Sized> ReverseGeocoder for &G {
    fn reverse(&self, point: LatLng) -> Result<Option<String>> {
        (**self).reverse(point)
    }
}

impl<G: ReverseGeocoder + ?Sized> ReverseGeocoder for Box<G> {
    fn reverse(&self, point: LatLng) -> Result<Option<String>> {
        (**self).reverse(point)
    }
}
