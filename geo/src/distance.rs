//! Haversine distance.

use geoclaim_types::{Coordinate, DistanceUnit};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Shortest surface distance between `a` and `b`, expressed in `unit`.
///
/// Symmetric, and exactly zero when `a == b`. Output for coordinates outside
/// the valid range is unspecified.
pub fn distance(a: &Coordinate, b: &Coordinate, unit: DistanceUnit) -> f64 {
    unit.from_km(distance_km(a, b))
}

/// [`distance`] in kilometers, the unit used for every eligibility decision.
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
