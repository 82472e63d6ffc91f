//! Approximate polygon centroid used as the geocoding point.

use serde_json::Value;
use solar_model::LatLng;

use crate::error::CentroidError;

/// Arithmetic mean of the outer ring's vertices.
///
/// `coordinates` is a GeoJSON polygon coordinate array; its first element is
/// the outer ring of `[longitude, latitude]` positions. Extra position
/// members (altitude) are ignored.
pub fn polygon_centroid(coordinates: &Value) -> Result<LatLng, CentroidError> {
    let ring = coordinates
        .as_array()
        .and_then(|rings| rings.first())
        .ok_or(CentroidError::EmptyRing)?;
    let points = ring.as_array().ok_or(CentroidError::MalformedRing)?;
    if points.is_empty() {
        return Err(CentroidError::EmptyRing);
    }

    let mut lat_sum = 0.0;
    let mut lng_sum = 0.0;
    for (index, point) in points.iter().enumerate() {
        let (lng, lat) = position(point).ok_or(CentroidError::MalformedPosition { index })?;
        lat_sum += lat;
        lng_sum += lng;
    }
    let n = points.len() as f64;
    Ok(LatLng::from_position(lng_sum / n, lat_sum / n))
}

fn position(point: &Value) -> Option<(f64, f64)> {
    let members = point.as_array()?;
    let lng = members.first()?.as_f64()?;
    let lat = members.get(1)?.as_f64()?;
    Some((lng, lat))
}
