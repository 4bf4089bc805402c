//! Haversine distance oracle.
//!
//! Great-circle distance between two locations, the base metric for every
//! edge cost in the engine.

use crate::location::Location;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two locations in kilometers.
///
/// Symmetric, non-negative, and zero for identical coordinates. Valid for
/// the full latitude/longitude range.
pub fn distance_km(from: &Location, to: &Location) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.lon - from.lon).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}
