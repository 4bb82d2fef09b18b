//! Great-circle distance on a spherical Earth.
//!
//! Pure functions only: no I/O, no validation. Callers are expected to hand
//! in coordinates that already satisfy the range invariant.

pub mod distance;

pub use distance::{distance, distance_km, EARTH_RADIUS_KM};
