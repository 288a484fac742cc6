//! The relay contract shared by every external-service client.
//!
//! The gateway never reinterprets what a remote service said. Any HTTP
//! response, success or failure, becomes a [`Relayed`] value that handlers
//! map straight onto the outgoing response. Only transport-level failures
//! (connect, DNS, TLS, timeout, a body cut off mid-read) are errors, and
//! those map to the gateway's generic 500.

use reqwest::StatusCode;
use serde_json::Value;

/// Errors from the external-client layer.
///
/// Note what is NOT here: a "remote returned 4xx/5xx" variant. Remote
/// status codes are data to be relayed, not errors.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The HTTP exchange itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// A response captured for verbatim relay: the remote status code plus the
/// decoded body, if any.
#[derive(Debug, Clone)]
pub struct Relayed {
    /// Status code exactly as the remote service returned it.
    pub status: StatusCode,
    /// Decoded body. `None` for empty bodies (204 and friends).
    pub body: Option<Value>,
}

impl Relayed {
    /// Capture a [`reqwest::Response`] for relay.
    ///
    /// JSON bodies are decoded as-is; non-JSON bodies are wrapped as
    /// `{ "message": "<text>" }` so the relay always emits JSON; empty
    /// bodies relay with no body at all.
    pub async fn capture(response: reqwest::Response) -> Result<Self, UpstreamError> {
        let status = response.status();
        let text = response.text().await?;

        let body = if text.is_empty() {
            None
        } else {
            match serde_json::from_str::<Value>(&text) {
                Ok(value) => Some(value),
                Err(_) => Some(serde_json::json!({ "message": text })),
            }
        };

        Ok(Self { status, body })
    }

    /// Whether the remote service reported success (2xx).
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_display_includes_cause() {
        // Build a reqwest error from an invalid URL.
        let req_err = reqwest::Client::new().get("://bad").build().unwrap_err();
        let err = UpstreamError::Request(req_err);
        assert!(err.to_string().contains("HTTP request failed"));
    }

    #[test]
    fn is_success_follows_status_class() {
        let ok = Relayed {
            status: StatusCode::OK,
            body: None,
        };
        let not_found = Relayed {
            status: StatusCode::NOT_FOUND,
            body: None,
        };
        assert!(ok.is_success());
        assert!(!not_found.is_success());
    }
}
