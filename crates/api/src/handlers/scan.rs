//! Handlers for the `/scan` handoff routes.
//!
//! The desktop client creates a session and renders its id as a QR code;
//! the phone scans a document and submits the extracted fields against
//! that id; the desktop polls until the data shows up. Sessions are
//! ephemeral -- server restarts and TTL expiry both lose them, and the
//! client simply starts over.

use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rentora_core::error::CoreError;
use rentora_core::scan::ScanSession;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request payload for submitting scanned data.
#[derive(Debug, Deserialize)]
pub struct SubmitScanRequest {
    /// Extracted document fields. The gateway treats this as opaque; the
    /// desktop client knows the shape it asked the phone to produce.
    pub data: Value,
}

/// POST /api/scan/sessions
pub async fn create_session(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<DataResponse<ScanSession>>)> {
    let ttl = Duration::from_secs(state.config.scan_session_ttl_secs);
    let session = state.scan_sessions.create(ttl).await;

    tracing::info!(session_id = %session.id, ttl_secs = ttl.as_secs(), "Scan session created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: session })))
}

/// GET /api/scan/sessions/{id}
///
/// Polled by the desktop client; expired sessions answer 404 exactly like
/// unknown ones.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DataResponse<ScanSession>>> {
    let session = state
        .scan_sessions
        .get(id)
        .await
        .ok_or(CoreError::NotFound {
            entity: "ScanSession",
            id,
        })?;

    Ok(Json(DataResponse { data: session }))
}

/// POST /api/scan/sessions/{id}/result
pub async fn submit_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SubmitScanRequest>,
) -> AppResult<Json<DataResponse<ScanSession>>> {
    let session = state.scan_sessions.submit(id, payload.data).await?;

    tracing::info!(session_id = %id, "Scan data submitted");

    Ok(Json(DataResponse { data: session }))
}

/// DELETE /api/scan/sessions/{id}
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if state.scan_sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ScanSession",
            id,
        }))
    }
}
