//! Handlers for the `/customers` relay routes.

use axum::extract::{Path, RawQuery, State};
use axum::response::Response;
use axum::Json;
use serde_json::Value;

use crate::error::AppResult;
use crate::middleware::Forwarded;
use crate::response::relay;
use crate::state::AppState;

/// GET /api/customers
///
/// The query string forwards verbatim, so upstream search and pagination
/// parameters (`search`, `page`, `pageSize`) work unchanged.
pub async fn list(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    forwarded: Forwarded,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .get("/customers", query.as_deref(), &forwarded.auth)
        .await?;
    Ok(relay(relayed))
}

/// POST /api/customers
pub async fn create(
    State(state): State<AppState>,
    forwarded: Forwarded,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    let relayed = state.upstream.post("/customers", &forwarded.auth, &body).await?;
    Ok(relay(relayed))
}

/// GET /api/customers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    forwarded: Forwarded,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .get(&format!("/customers/{id}"), None, &forwarded.auth)
        .await?;
    Ok(relay(relayed))
}

/// PUT /api/customers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    forwarded: Forwarded,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .put(&format!("/customers/{id}"), &forwarded.auth, &body)
        .await?;
    Ok(relay(relayed))
}

/// DELETE /api/customers/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    forwarded: Forwarded,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .delete(&format!("/customers/{id}"), &forwarded.auth)
        .await?;
    Ok(relay(relayed))
}

/// GET /api/customers/{id}/reservations
pub async fn reservations(
    State(state): State<AppState>,
    Path(id): Path<String>,
    forwarded: Forwarded,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .get(&format!("/customers/{id}/reservations"), None, &forwarded.auth)
        .await?;
    Ok(relay(relayed))
}
