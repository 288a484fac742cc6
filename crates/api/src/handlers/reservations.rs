//! Handlers for the `/reservations` relay routes.

use axum::extract::{Path, RawQuery, State};
use axum::response::Response;
use axum::Json;
use serde_json::Value;

use crate::error::AppResult;
use crate::middleware::Forwarded;
use crate::response::relay;
use crate::state::AppState;

/// GET /api/reservations
pub async fn list(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    forwarded: Forwarded,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .get("/reservations", query.as_deref(), &forwarded.auth)
        .await?;
    Ok(relay(relayed))
}

/// POST /api/reservations
pub async fn create(
    State(state): State<AppState>,
    forwarded: Forwarded,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .post("/reservations", &forwarded.auth, &body)
        .await?;
    Ok(relay(relayed))
}

/// GET /api/reservations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    forwarded: Forwarded,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .get(&format!("/reservations/{id}"), None, &forwarded.auth)
        .await?;
    Ok(relay(relayed))
}

/// PUT /api/reservations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    forwarded: Forwarded,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .put(&format!("/reservations/{id}"), &forwarded.auth, &body)
        .await?;
    Ok(relay(relayed))
}

/// DELETE /api/reservations/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    forwarded: Forwarded,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .delete(&format!("/reservations/{id}"), &forwarded.auth)
        .await?;
    Ok(relay(relayed))
}

/// POST /api/reservations/{id}/pickup
///
/// Marks the reservation picked up. The body (odometer, fuel level,
/// condition notes) belongs to the upstream API and forwards untouched;
/// some clients send none at all.
pub async fn record_pickup(
    State(state): State<AppState>,
    Path(id): Path<String>,
    forwarded: Forwarded,
    body: Option<Json<Value>>,
) -> AppResult<Response> {
    let path = format!("/reservations/{id}/pickup");
    let relayed = match body {
        Some(Json(body)) => state.upstream.post(&path, &forwarded.auth, &body).await?,
        None => state.upstream.post_empty(&path, &forwarded.auth).await?,
    };
    Ok(relay(relayed))
}

/// POST /api/reservations/{id}/return
pub async fn record_return(
    State(state): State<AppState>,
    Path(id): Path<String>,
    forwarded: Forwarded,
    body: Option<Json<Value>>,
) -> AppResult<Response> {
    let path = format!("/reservations/{id}/return");
    let relayed = match body {
        Some(Json(body)) => state.upstream.post(&path, &forwarded.auth, &body).await?,
        None => state.upstream.post_empty(&path, &forwarded.auth).await?,
    };
    Ok(relay(relayed))
}
