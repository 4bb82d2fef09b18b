//! HTTP request handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use geoclaim_gate::{ClaimExecutor, TargetResolver};
use geoclaim_types::{
    ClaimErrorKind, ClaimRequest, ClaimantId, Coordinate, DistanceUnit, Receipt, TargetId,
};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, Instrument};

use crate::error::RpcError;
use crate::server::{rpc_span, RpcState};

// ── Claim (privileged) ───────────────────────────────────────────────────

/// Body of `POST /claim`.
///
/// The camelCase aliases accept the payload shape of existing web clients.
/// Anything the client says about the target's position or its own
/// eligibility is ignored: the target comes from the registry and
/// eligibility is recomputed here.
#[derive(Debug, Deserialize)]
pub struct ClaimRequestBody {
    #[serde(alias = "tokenId")]
    pub target_id: TargetId,
    #[serde(alias = "address")]
    pub claimant: ClaimantId,
    #[serde(alias = "userPosition")]
    pub claimant_position: Coordinate,
    /// Client-side advisory verdict. Accepted in any shape and never read.
    #[serde(default)]
    pub eligible: Option<IgnoredAny>,
}

impl From<ClaimRequestBody> for ClaimRequest {
    fn from(body: ClaimRequestBody) -> Self {
        ClaimRequest {
            target_id: body.target_id,
            claimant: body.claimant,
            position: body.claimant_position,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimResponse {
    pub receipt: Receipt,
    pub distance_km: f64,
}

pub async fn claim<R, E>(
    State(state): State<Arc<RpcState<R, E>>>,
    payload: Result<Json<ClaimRequestBody>, JsonRejection>,
) -> Result<Json<ClaimResponse>, RpcError>
where
    R: TargetResolver + 'static,
    E: ClaimExecutor + 'static,
{
    let Json(body) = payload.map_err(|e| {
        state.metrics.claims_invalid.inc();
        RpcError::InvalidRequest(e.body_text())
    })?;
    if body.eligible.is_some() {
        debug!("ignoring client-asserted eligibility");
    }

    let request = ClaimRequest::from(body);
    match state
        .authority
        .claim(&request)
        .instrument(rpc_span("claim"))
        .await
    {
        Ok(outcome) => {
            state.metrics.record_granted(outcome.verdict.distance_km);
            Ok(Json(ClaimResponse {
                receipt: outcome.receipt,
                distance_km: outcome.verdict.distance_km,
            }))
        }
        Err(e) => {
            state.metrics.record_rejected(&e);
            Err(e.into())
        }
    }
}

// ── Eligibility (advisory) ───────────────────────────────────────────────

/// Body of `POST /eligibility`.
#[derive(Debug, Deserialize)]
pub struct EligibilityRequest {
    #[serde(alias = "tokenId")]
    pub target_id: TargetId,
    #[serde(alias = "userPosition")]
    pub claimant_position: Coordinate,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EligibilityResponse {
    pub target_id: TargetId,
    pub eligible: bool,
    pub distance_km: f64,
    pub distance_miles: f64,
    pub radius_km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<ClaimErrorKind>,
}

pub async fn eligibility<R, E>(
    State(state): State<Arc<RpcState<R, E>>>,
    payload: Result<Json<EligibilityRequest>, JsonRejection>,
) -> Result<Json<EligibilityResponse>, RpcError>
where
    R: TargetResolver + 'static,
    E: ClaimExecutor + 'static,
{
    let Json(body) = payload.map_err(|e| RpcError::InvalidRequest(e.body_text()))?;

    let (target, verdict) = rpc_span("eligibility")
        .in_scope(|| state.authority.advise(&body.target_id, &body.claimant_position))?;
    state.metrics.evaluations.inc();

    Ok(Json(EligibilityResponse {
        target_id: target.id,
        eligible: verdict.eligible,
        distance_km: verdict.distance_km,
        distance_miles: DistanceUnit::Miles.from_km(verdict.distance_km),
        radius_km: target.radius.km(),
        reason: verdict.reason,
    }))
}

// ── Health / metrics ─────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn metrics<R, E>(
    State(state): State<Arc<RpcState<R, E>>>,
) -> Result<impl IntoResponse, RpcError>
where
    R: TargetResolver + 'static,
    E: ClaimExecutor + 'static,
{
    let text = state
        .metrics
        .encode()
        .map_err(|e| RpcError::Server(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], text))
}
