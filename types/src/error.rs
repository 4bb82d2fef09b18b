//! Errors raised when constructing geographic values.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),

    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("malformed coordinate: {0}")]
    Malformed(String),
}
