use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rentora_core::error::CoreError;
use rentora_translate::TranslateError;
use rentora_upstream::UpstreamError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and the external-client error types
/// for transport failures. Implements [`IntoResponse`] to produce consistent
/// JSON error responses.
///
/// Remote HTTP responses never surface here: a 404 or 500 from an external
/// service is captured as a `Relayed` value and relayed verbatim by the
/// handler. This type only covers errors the gateway itself must answer for.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `rentora_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Transport failure talking to an external service (connect, DNS,
    /// timeout). The remote never answered, so there is nothing to relay.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Failure from the translation endpoint.
    #[error(transparent)]
    Translate(#[from] TranslateError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- External transport failures ---
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "Upstream request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPSTREAM_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            // --- Translation endpoint failures ---
            AppError::Translate(err) => match err {
                // The endpoint answered with an error status: relay it.
                TranslateError::Api { status, body } => (
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    "TRANSLATE_ERROR",
                    body.clone(),
                ),
                TranslateError::Request(e) => {
                    tracing::error!(error = %e, "Translation request failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "UPSTREAM_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
