//! Axum-based HTTP server.

use axum::routing::{get, post};
use axum::Router;
use geoclaim_gate::{ClaimAuthority, ClaimExecutor, TargetResolver};
use std::future::Future;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, info_span, Span};

use crate::error::RpcError;
use crate::handlers;
use crate::metrics::ClaimMetrics;

/// State shared by every handler.
pub struct RpcState<R, E> {
    pub authority: ClaimAuthority<R, E>,
    pub metrics: ClaimMetrics,
}

impl<R: TargetResolver, E: ClaimExecutor> RpcState<R, E> {
    pub fn new(authority: ClaimAuthority<R, E>) -> Self {
        Self {
            authority,
            metrics: ClaimMetrics::new(),
        }
    }
}

/// Span covering a single action handled by the HTTP server.
pub fn rpc_span(action: &str) -> Span {
    info_span!("rpc", action = %action)
}

/// Build the router with all endpoints.
pub fn router<R, E>(state: Arc<RpcState<R, E>>) -> Router
where
    R: TargetResolver + 'static,
    E: ClaimExecutor + 'static,
{
    Router::new()
        .route("/claim", post(handlers::claim::<R, E>))
        .route("/eligibility", post(handlers::eligibility::<R, E>))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics::<R, E>))
        .with_state(state)
}

pub struct RpcServer {
    pub bind_address: String,
    pub port: u16,
    /// Allow cross-origin browser clients.
    pub enable_cors: bool,
}

impl RpcServer {
    pub fn new(bind_address: impl Into<String>, port: u16) -> Self {
        Self {
            bind_address: bind_address.into(),
            port,
            enable_cors: false,
        }
    }

    pub fn with_cors(mut self, enable: bool) -> Self {
        self.enable_cors = enable;
        self
    }

    /// Serve until `shutdown` resolves.
    pub async fn start<R, E>(
        &self,
        state: Arc<RpcState<R, E>>,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), RpcError>
    where
        R: TargetResolver + 'static,
        E: ClaimExecutor + 'static,
    {
        let mut app = router(state);
        if self.enable_cors {
            app = app.layer(CorsLayer::permissive());
        }

        let addr = format!("{}:{}", self.bind_address, self.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| RpcError::Server(format!("bind {addr}: {e}")))?;
        info!("claim server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| RpcError::Server(e.to_string()))?;
        info!("claim server stopped");
        Ok(())
    }
}
