//! HTTP server for geofenced claims.
//!
//! Provides endpoints for:
//! - Advisory eligibility checks (`POST /eligibility`)
//! - Privileged claims, re-validated server side (`POST /claim`)
//! - Liveness (`GET /health`)
//! - Prometheus metrics (`GET /metrics`)

pub mod error;
pub mod handlers;
pub mod metrics;
pub mod server;

pub use error::RpcError;
pub use metrics::ClaimMetrics;
pub use server::{router, RpcServer, RpcState};
