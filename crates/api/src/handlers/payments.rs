//! Handlers for the `/payments` relay routes.
//!
//! Payment records live upstream; refunds execute there too. The gateway's
//! only Stripe involvement is the Terminal flow in `handlers::terminal`.

use axum::extract::{Path, RawQuery, State};
use axum::response::Response;
use axum::Json;
use serde_json::Value;

use crate::error::AppResult;
use crate::middleware::Forwarded;
use crate::response::relay;
use crate::state::AppState;

/// GET /api/payments
pub async fn list(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    forwarded: Forwarded,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .get("/payments", query.as_deref(), &forwarded.auth)
        .await?;
    Ok(relay(relayed))
}

/// GET /api/payments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    forwarded: Forwarded,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .get(&format!("/payments/{id}"), None, &forwarded.auth)
        .await?;
    Ok(relay(relayed))
}

/// POST /api/payments/{id}/refund
///
/// A body (partial amount, reason) is optional; a bare POST refunds in
/// full, per the upstream API's own defaulting.
pub async fn refund(
    State(state): State<AppState>,
    Path(id): Path<String>,
    forwarded: Forwarded,
    body: Option<Json<Value>>,
) -> AppResult<Response> {
    let path = format!("/payments/{id}/refund");
    let relayed = match body {
        Some(Json(body)) => state.upstream.post(&path, &forwarded.auth, &body).await?,
        None => state.upstream.post_empty(&path, &forwarded.auth).await?,
    };
    Ok(relay(relayed))
}
