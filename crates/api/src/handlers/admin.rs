//! Generic passthrough handler for the `/admin` surface.

use axum::extract::{Path, RawQuery, State};
use axum::http::Method;
use axum::response::Response;
use axum::Json;
use serde_json::Value;

use crate::error::AppResult;
use crate::middleware::Forwarded;
use crate::response::relay;
use crate::state::AppState;

/// ANY /api/admin/{*path}
///
/// Forwards the request wholesale: method, remaining path, raw query
/// string, and JSON body (when the request carries one) all pass through
/// to the upstream `/admin/...` endpoint.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    forwarded: Forwarded,
    body: Option<Json<Value>>,
) -> AppResult<Response> {
    let body = body.map(|Json(value)| value);

    let relayed = state
        .upstream
        .forward(
            method,
            &format!("/admin/{path}"),
            query.as_deref(),
            &forwarded.auth,
            body.as_ref(),
        )
        .await?;

    Ok(relay(relayed))
}
