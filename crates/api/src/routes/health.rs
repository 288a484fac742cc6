use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the upstream rental API is reachable.
    pub upstream_healthy: bool,
}

/// GET /health -- returns gateway and upstream health.
///
/// An unreachable upstream degrades the status but never fails the check;
/// the locally-owned endpoints keep working without it.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let upstream_healthy = state.upstream.ping().await;

    let status = if upstream_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        upstream_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
