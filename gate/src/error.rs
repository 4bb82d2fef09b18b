use geoclaim_types::{ClaimErrorKind, GeoError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("invalid coordinates")]
    InvalidCoordinate,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("target not found: {0}")]
    TargetNotFound(String),

    #[error("out of range: {distance_km:.4} km from target, radius {radius_km:.4} km")]
    OutOfRange { distance_km: f64, radius_km: f64 },

    #[error("execution failed: {0}")]
    ExecutionFailed(#[from] ExecutionError),
}

impl ClaimError {
    /// The caller-facing category of this failure.
    pub fn kind(&self) -> ClaimErrorKind {
        match self {
            Self::InvalidCoordinate => ClaimErrorKind::InvalidCoordinate,
            Self::InvalidRequest(_) => ClaimErrorKind::InvalidRequest,
            Self::TargetNotFound(_) => ClaimErrorKind::TargetNotFound,
            Self::OutOfRange { .. } => ClaimErrorKind::OutOfRange,
            Self::ExecutionFailed(_) => ClaimErrorKind::ExecutionFailed,
        }
    }
}

/// Failure reported by a [`crate::ClaimExecutor`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error("executor rejected the claim: {0}")]
    Rejected(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("executor timed out")]
    Timeout,

    #[error("invalid executor response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("duplicate target id: {0}")]
    DuplicateTarget(String),

    #[error("empty target id")]
    EmptyTargetId,

    #[error("target {id}: {source}")]
    InvalidTarget { id: String, source: GeoError },
}
