//! Distance units and the geofence radius.
//!
//! Everything inside the workspace measures distance in kilometers. Miles
//! exist only at the edges: when a radius is configured in miles, and when a
//! distance is presented back to a person.

use crate::error::GeoError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilometers in one statute mile.
pub const KM_PER_MILE: f64 = 1.60934;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
}

impl DistanceUnit {
    /// Express a kilometer distance in this unit.
    pub fn from_km(&self, km: f64) -> f64 {
        match self {
            Self::Kilometers => km,
            Self::Miles => km / KM_PER_MILE,
        }
    }

    /// Convert a distance in this unit to kilometers.
    pub fn to_km(&self, value: f64) -> f64 {
        match self {
            Self::Kilometers => value,
            Self::Miles => value * KM_PER_MILE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kilometers => "km",
            Self::Miles => "mi",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geofence radius around a target, always stored in kilometers.
///
/// Positive, non-zero and finite. Serialized as a bare kilometer value.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Radius(f64);

impl Radius {
    pub fn new(value: f64, unit: DistanceUnit) -> Result<Self, GeoError> {
        let km = unit.to_km(value);
        if !km.is_finite() || km <= 0.0 {
            return Err(GeoError::InvalidRadius(value));
        }
        Ok(Self(km))
    }

    pub fn from_km(km: f64) -> Result<Self, GeoError> {
        Self::new(km, DistanceUnit::Kilometers)
    }

    pub fn from_miles(miles: f64) -> Result<Self, GeoError> {
        Self::new(miles, DistanceUnit::Miles)
    }

    pub fn km(&self) -> f64 {
        self.0
    }

    pub fn in_unit(&self, unit: DistanceUnit) -> f64 {
        unit.from_km(self.0)
    }
}

impl TryFrom<f64> for Radius {
    type Error = GeoError;

    fn try_from(km: f64) -> Result<Self, Self::Error> {
        Self::from_km(km)
    }
}

impl From<Radius> for f64 {
    fn from(r: Radius) -> Self {
        r.0
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.0)
    }
}
