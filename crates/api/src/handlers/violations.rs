//! Handlers for the `/violations` routes.
//!
//! Violation records attached to reservations live in the upstream rental
//! API. The `lookup` endpoint is different: it queries the external
//! violations service directly, by plate and issuing region, so staff can
//! check a vehicle before it goes back on the lot.

use axum::extract::{Path, RawQuery, State};
use axum::response::Response;
use axum::Json;
use rentora_core::validate::{validate_plate, validate_region};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::Forwarded;
use crate::response::relay;
use crate::state::AppState;

/// Request payload for the external violations lookup.
#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    /// License plate, as printed.
    pub plate: String,
    /// Issuing region (state/province) code, 2-3 letters.
    pub region: String,
}

/// GET /api/violations
pub async fn list(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    forwarded: Forwarded,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .get("/violations", query.as_deref(), &forwarded.auth)
        .await?;
    Ok(relay(relayed))
}

/// GET /api/violations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    forwarded: Forwarded,
) -> AppResult<Response> {
    let relayed = state
        .upstream
        .get(&format!("/violations/{id}"), None, &forwarded.auth)
        .await?;
    Ok(relay(relayed))
}

/// POST /api/violations/lookup
pub async fn lookup(
    State(state): State<AppState>,
    Json(payload): Json<LookupRequest>,
) -> AppResult<Response> {
    validate_plate(&payload.plate)?;
    validate_region(&payload.region)?;

    let relayed = state
        .violations
        .lookup(payload.plate.trim(), &payload.region)
        .await?;

    Ok(relay(relayed))
}
