//! Handlers for the `/vehicles` relay routes.
//!
//! The upstream API serializes vehicles with PascalCase keys (`Make`,
//! `Model`) while the web client expects camelCase, so read responses pass
//! through [`normalize_keys`] before relay. Writes forward untouched -- the
//! upstream accepts both casings on input.

use axum::extract::{Path, RawQuery, State};
use axum::response::Response;
use axum::Json;
use rentora_core::normalize::normalize_keys;
use rentora_upstream::Relayed;
use serde_json::Value;

use crate::error::AppResult;
use crate::middleware::Forwarded;
use crate::response::relay;
use crate::state::AppState;

/// GET /api/vehicles
pub async fn list(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    forwarded: Forwarded,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .get("/vehicles", query.as_deref(), &forwarded.auth)
        .await?;
    Ok(relay(normalized(relayed)))
}

/// POST /api/vehicles
pub async fn create(
    State(state): State<AppState>,
    forwarded: Forwarded,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    let relayed = state.upstream.post("/vehicles", &forwarded.auth, &body).await?;
    Ok(relay(relayed))
}

/// GET /api/vehicles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    forwarded: Forwarded,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .get(&format!("/vehicles/{id}"), None, &forwarded.auth)
        .await?;
    Ok(relay(normalized(relayed)))
}

/// PUT /api/vehicles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    forwarded: Forwarded,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .put(&format!("/vehicles/{id}"), &forwarded.auth, &body)
        .await?;
    Ok(relay(relayed))
}

/// DELETE /api/vehicles/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    forwarded: Forwarded,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .delete(&format!("/vehicles/{id}"), &forwarded.auth)
        .await?;
    Ok(relay(relayed))
}

/// GET /api/vehicles/{id}/availability
pub async fn availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
    forwarded: Forwarded,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .get(
            &format!("/vehicles/{id}/availability"),
            query.as_deref(),
            &forwarded.auth,
        )
        .await?;
    Ok(relay(relayed))
}

/// Normalize the keys of a successful read response. Error bodies relay
/// untouched so upstream error shapes stay recognizable.
fn normalized(mut relayed: Relayed) -> Relayed {
    if relayed.is_success() {
        relayed.body = relayed.body.map(normalize_keys);
    }
    relayed
}
