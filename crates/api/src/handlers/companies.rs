//! Handlers for the `/companies` relay routes.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde_json::Value;

use crate::error::AppResult;
use crate::middleware::Forwarded;
use crate::response::relay;
use crate::state::AppState;

/// GET /api/companies
pub async fn list(State(state): State<AppState>, forwarded: Forwarded) -> AppResult<Response> {
    let relayed = state.upstream.get("/companies", None, &forwarded.auth).await?;
    Ok(relay(relayed))
}

/// POST /api/companies
pub async fn create(
    State(state): State<AppState>,
    forwarded: Forwarded,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    let relayed = state.upstream.post("/companies", &forwarded.auth, &body).await?;
    Ok(relay(relayed))
}

/// GET /api/companies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    forwarded: Forwarded,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .get(&format!("/companies/{id}"), None, &forwarded.auth)
        .await?;
    Ok(relay(relayed))
}

/// PUT /api/companies/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    forwarded: Forwarded,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .put(&format!("/companies/{id}"), &forwarded.auth, &body)
        .await?;
    Ok(relay(relayed))
}

/// DELETE /api/companies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    forwarded: Forwarded,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .delete(&format!("/companies/{id}"), &forwarded.auth)
        .await?;
    Ok(relay(relayed))
}

/// GET /api/companies/{id}/locations
pub async fn locations(
    State(state): State<AppState>,
    Path(id): Path<String>,
    forwarded: Forwarded,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .get(&format!("/companies/{id}/locations"), None, &forwarded.auth)
        .await?;
    Ok(relay(relayed))
}
