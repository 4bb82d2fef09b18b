//! RPC error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use geoclaim_gate::ClaimError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("server error: {0}")]
    Server(String),
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub kind: &'static str,
}

impl RpcError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Claim(ClaimError::InvalidCoordinate) => StatusCode::BAD_REQUEST,
            Self::Claim(ClaimError::InvalidRequest(_)) => StatusCode::BAD_REQUEST,
            Self::Claim(ClaimError::TargetNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Claim(ClaimError::OutOfRange { .. }) => StatusCode::FORBIDDEN,
            Self::Claim(ClaimError::ExecutionFailed(_)) => StatusCode::BAD_GATEWAY,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller-facing error body. Internal detail stays in the logs.
    pub fn body(&self) -> ErrorBody {
        let (error, kind) = match self {
            Self::Claim(ClaimError::InvalidCoordinate) => {
                ("invalid coordinates", "invalid_coordinate")
            }
            Self::Claim(ClaimError::InvalidRequest(_)) | Self::InvalidRequest(_) => {
                ("invalid request", "invalid_request")
            }
            Self::Claim(ClaimError::TargetNotFound(_)) => ("target not found", "target_not_found"),
            Self::Claim(ClaimError::OutOfRange { .. }) => ("out of range", "out_of_range"),
            Self::Claim(ClaimError::ExecutionFailed(_)) => ("execution failed", "execution_failed"),
            Self::Server(_) => ("internal error", "internal"),
        };
        ErrorBody { error, kind }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoclaim_gate::ExecutionError;

    #[test]
    fn out_of_range_and_execution_failure_differ() {
        let oor = RpcError::from(ClaimError::OutOfRange {
            distance_km: 1.0,
            radius_km: 0.1,
        });
        let failed = RpcError::from(ClaimError::ExecutionFailed(ExecutionError::Timeout));
        assert!(oor.status().is_client_error());
        assert!(failed.status().is_server_error());
        assert_eq!(oor.body().error, "out of range");
        assert_eq!(failed.body().error, "execution failed");
    }

    #[test]
    fn invalid_coordinates_are_client_errors() {
        let err = RpcError::from(ClaimError::InvalidCoordinate);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().error, "invalid coordinates");
    }
}
