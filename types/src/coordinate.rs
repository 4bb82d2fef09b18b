//! Geographic coordinate in decimal degrees.

use crate::error::GeoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point on the Earth's surface, in degrees.
///
/// On the wire a coordinate is `{ "lat": .., "lng": .. }`; the long names
/// `latitude` / `longitude` are accepted as aliases. Values arriving from the
/// wire are not range-checked at deserialization time. Callers that need the
/// invariant either build through [`Coordinate::new`] or check
/// [`Coordinate::is_valid`] before trusting the value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(rename = "lat", alias = "latitude")]
    pub latitude: f64,
    #[serde(rename = "lng", alias = "longitude")]
    pub longitude: f64,
}

impl Coordinate {
    pub const MAX_LATITUDE: f64 = 90.0;
    pub const MAX_LONGITUDE: f64 = 180.0;

    /// Build a coordinate, rejecting out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !Self::latitude_in_range(latitude) {
            return Err(GeoError::InvalidLatitude(latitude));
        }
        if !Self::longitude_in_range(longitude) {
            return Err(GeoError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Whether both components satisfy the coordinate invariant.
    ///
    /// NaN and infinities are never valid.
    pub fn is_valid(&self) -> bool {
        Self::latitude_in_range(self.latitude) && Self::longitude_in_range(self.longitude)
    }

    /// Re-check a wire value, turning it into a proven-valid coordinate.
    pub fn validated(self) -> Result<Self, GeoError> {
        Self::new(self.latitude, self.longitude)
    }

    fn latitude_in_range(lat: f64) -> bool {
        (-Self::MAX_LATITUDE..=Self::MAX_LATITUDE).contains(&lat)
    }

    fn longitude_in_range(lng: f64) -> bool {
        (-Self::MAX_LONGITUDE..=Self::MAX_LONGITUDE).contains(&lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Parses `"LAT,LNG"` (whitespace around either part is ignored).
impl FromStr for Coordinate {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| GeoError::Malformed(format!("expected LAT,LNG, got {s:?}")))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| GeoError::Malformed(format!("bad latitude {lat:?}")))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|_| GeoError::Malformed(format!("bad longitude {lng:?}")))?;
        Self::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_extremes() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Coordinate::new(90.0001, 0.0),
            Err(GeoError::InvalidLatitude(90.0001))
        );
        assert_eq!(
            Coordinate::new(0.0, -180.5),
            Err(GeoError::InvalidLongitude(-180.5))
        );
    }

    #[test]
    fn non_finite_is_invalid() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
        let raw = Coordinate {
            latitude: f64::NAN,
            longitude: 0.0,
        };
        assert!(!raw.is_valid());
    }

    #[test]
    fn wire_format_uses_short_names() {
        let c = Coordinate::new(51.505, -0.09).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"lat":51.505,"lng":-0.09}"#);

        let long: Coordinate =
            serde_json::from_str(r#"{"latitude":40.0,"longitude":-74.0}"#).unwrap();
        assert_eq!(long, Coordinate::new(40.0, -74.0).unwrap());
    }

    #[test]
    fn deserialization_does_not_range_check() {
        let raw: Coordinate = serde_json::from_str(r#"{"lat":123.0,"lng":0.0}"#).unwrap();
        assert!(!raw.is_valid());
        assert!(raw.validated().is_err());
    }

    #[test]
    fn parse_from_cli_form() {
        let c: Coordinate = " 40.001 , -74.0 ".parse().unwrap();
        assert_eq!(c, Coordinate::new(40.001, -74.0).unwrap());
        assert!("40.0".parse::<Coordinate>().is_err());
        assert!("abc,1".parse::<Coordinate>().is_err());
        assert!("95,1".parse::<Coordinate>().is_err());
    }
}
