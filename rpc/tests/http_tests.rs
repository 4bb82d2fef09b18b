//! End-to-end tests of the HTTP surface, driving the router in-process.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use geoclaim_gate::{ClaimAuthority, ExecutionError, TargetRegistry};
use geoclaim_nullables::NullExecutor;
use geoclaim_rpc::handlers::{ClaimResponse, EligibilityResponse};
use geoclaim_rpc::{router, RpcState};
use geoclaim_types::{ClaimTarget, Coordinate, Radius, TargetId};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

type State = Arc<RpcState<TargetRegistry, NullExecutor>>;

fn registry() -> TargetRegistry {
    TargetRegistry::new([
        ClaimTarget::new(
            TargetId::new("token-1"),
            Coordinate::new(40.0, -74.0).unwrap(),
            Radius::from_km(0.1609).unwrap(),
        ),
        ClaimTarget::new(
            TargetId::new("token-2"),
            Coordinate::new(51.505, -0.09).unwrap(),
            Radius::from_miles(0.1).unwrap(),
        ),
    ])
    .unwrap()
}

fn app_with(executor: NullExecutor) -> (State, Router) {
    let state = Arc::new(RpcState::new(ClaimAuthority::new(registry(), executor)));
    let app = router(state.clone());
    (state, app)
}

fn app() -> (State, Router) {
    app_with(NullExecutor::new())
}

async fn post(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

// ---------------------------------------------------------------------------
// POST /claim
// ---------------------------------------------------------------------------

#[tokio::test]
async fn claim_within_radius_returns_receipt() {
    let (state, app) = app();
    let (status, body) = post(
        app,
        "/claim",
        json!({
            "target_id": "token-1",
            "claimant": "0xabc",
            "claimant_position": { "lat": 40.001, "lng": -74.0 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: ClaimResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.receipt.target_id, TargetId::new("token-1"));
    assert_eq!(response.receipt.reference, "null-receipt-1");
    assert!((response.distance_km - 0.111).abs() < 0.001);
    assert_eq!(state.authority.executor().call_count(), 1);
    assert_eq!(state.metrics.claims_granted.get(), 1);
}

#[tokio::test]
async fn client_asserted_eligibility_is_not_trusted() {
    let (state, app) = app();
    let (status, body) = post(
        app,
        "/claim",
        json!({
            "target_id": "token-1",
            "claimant": "0xabc",
            "claimant_position": { "lat": 40.01, "lng": -74.0 },
            "eligible": true
        }),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "out of range");
    assert_eq!(body["kind"], "out_of_range");
    assert_eq!(state.authority.executor().call_count(), 0);
    assert_eq!(state.metrics.claims_out_of_range.get(), 1);
}

#[tokio::test]
async fn non_boolean_client_eligibility_is_ignored() {
    let (state, app) = app();
    let (status, body) = post(
        app,
        "/claim",
        json!({
            "target_id": "token-1",
            "claimant": "0xabc",
            "claimant_position": { "lat": 40.001, "lng": -74.0 },
            "eligible": "yes"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["receipt"]["reference"].is_string());
    assert_eq!(state.authority.executor().call_count(), 1);
}

#[tokio::test]
async fn client_supplied_target_position_is_ignored() {
    let (state, app) = app();
    // Legacy client shape, claiming the collectible sits where the user is.
    let (status, body) = post(
        app,
        "/claim",
        json!({
            "tokenId": "token-1",
            "address": "0xabc",
            "userPosition": { "lat": 10.0, "lng": 10.0 },
            "nftPosition": { "lat": 10.0, "lng": 10.0 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "out of range");
    assert_eq!(state.authority.executor().call_count(), 0);
}

#[tokio::test]
async fn claim_with_out_of_range_latitude_is_invalid() {
    let (state, app) = app();
    let (status, body) = post(
        app,
        "/claim",
        json!({
            "target_id": "token-1",
            "claimant": "0xabc",
            "claimant_position": { "lat": 140.0, "lng": -74.0 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid coordinates");
    assert_eq!(state.authority.executor().call_count(), 0);
    assert_eq!(state.metrics.claims_invalid.get(), 1);
}

#[tokio::test]
async fn claim_with_missing_fields_is_invalid_request() {
    let (state, app) = app();
    let (status, body) = post(
        app,
        "/claim",
        json!({ "target_id": "token-1", "claimant_position": { "lat": 40.0 } }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid request");
    assert_eq!(state.authority.executor().call_count(), 0);
}

#[tokio::test]
async fn claim_with_unknown_target_is_not_found() {
    let (_, app) = app();
    let (status, body) = post(
        app,
        "/claim",
        json!({
            "target_id": "token-404",
            "claimant": "0xabc",
            "claimant_position": { "lat": 40.0, "lng": -74.0 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "target not found");
}

#[tokio::test]
async fn executor_failure_surfaces_as_server_error() {
    let (state, app) =
        app_with(NullExecutor::failing(ExecutionError::Rejected("already minted".into())));
    let (status, body) = post(
        app,
        "/claim",
        json!({
            "target_id": "token-2",
            "claimant": "0xabc",
            "claimant_position": { "lat": 51.505, "lng": -0.09 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "execution failed");
    assert_eq!(state.authority.executor().call_count(), 1);
    assert_eq!(state.metrics.claims_failed.get(), 1);
}

// ---------------------------------------------------------------------------
// POST /eligibility
// ---------------------------------------------------------------------------

#[tokio::test]
async fn eligibility_reports_distance_in_both_units() {
    let (state, app) = app();
    let (status, body) = post(
        app,
        "/eligibility",
        json!({ "target_id": "token-1", "claimant_position": { "lat": 40.01, "lng": -74.0 } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: EligibilityResponse = serde_json::from_value(body).unwrap();
    assert!(!response.eligible);
    assert!(response.reason.is_none());
    assert!((response.distance_km - 1.11).abs() < 0.01);
    assert!((response.distance_miles - response.distance_km / 1.60934).abs() < 1e-9);
    assert_eq!(response.radius_km, 0.1609);
    // advisory checks never execute anything
    assert_eq!(state.authority.executor().call_count(), 0);
    assert_eq!(state.metrics.evaluations.get(), 1);
}

#[tokio::test]
async fn eligibility_with_invalid_coordinates_is_ineligible_verdict() {
    let (_, app) = app();
    let (status, body) = post(
        app,
        "/eligibility",
        json!({ "target_id": "token-1", "claimant_position": { "lat": 0.0, "lng": 500.0 } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["eligible"], false);
    assert_eq!(body["reason"], "invalid_coordinate");
}

#[tokio::test]
async fn eligibility_and_claim_agree_at_the_same_position() {
    for (lat, lng) in [(51.505, -0.09), (51.506, -0.09), (51.5065, -0.09), (51.52, -0.09)] {
        let (_, app) = app();
        let (_, advisory) = post(
            app.clone(),
            "/eligibility",
            json!({ "target_id": "token-2", "claimant_position": { "lat": lat, "lng": lng } }),
        )
        .await;
        let (status, _) = post(
            app,
            "/claim",
            json!({
                "target_id": "token-2",
                "claimant": "0xabc",
                "claimant_position": { "lat": lat, "lng": lng }
            }),
        )
        .await;

        let eligible = advisory["eligible"].as_bool().unwrap();
        assert_eq!(eligible, status == StatusCode::OK, "disagreement at {lat},{lng}");
    }
}

// ---------------------------------------------------------------------------
// GET /health, /metrics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_ok() {
    let (_, app) = app();
    let (status, body) = send(app, Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn metrics_endpoint_exposes_counters() {
    let (state, app) = app();
    state.metrics.claims_granted.inc();

    let response = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("geoclaim_claims_granted_total 1"));
}
