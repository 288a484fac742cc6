//! Shared response types for API handlers.
//!
//! Locally-owned endpoints (scan sessions, translation) use the
//! `{ "data": ... }` envelope via [`DataResponse`]. Relay endpoints bypass
//! the envelope entirely: [`relay`] maps a captured upstream response onto
//! the outgoing one, preserving status and body verbatim.

use axum::response::{IntoResponse, Response};
use axum::Json;
use rentora_upstream::Relayed;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope for locally-owned endpoints.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Turn a captured remote response into the outgoing one.
///
/// The remote's status code is kept as-is; a body, when present, goes out
/// as JSON exactly as captured. A body-less capture (204 and friends)
/// produces a body-less response.
pub fn relay(relayed: Relayed) -> Response {
    match relayed.body {
        Some(body) => (relayed.status, Json(body)).into_response(),
        None => relayed.status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test]
    fn relay_preserves_status_and_body_presence() {
        let with_body = relay(Relayed {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: Some(json!({ "error": "bad vehicle" })),
        });
        assert_eq!(with_body.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let empty = relay(Relayed {
            status: StatusCode::NO_CONTENT,
            body: None,
        });
        assert_eq!(empty.status(), StatusCode::NO_CONTENT);
    }
}
