//! HTTP client for the translation endpoint.
//!
//! Speaks the common self-hosted translation API shape: `POST /translate`
//! with `{ q, source, target, format }` returning `{ translatedText }`,
//! and `GET /languages` listing supported language pairs.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

/// HTTP request timeout for a single translation call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from the translation endpoint.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The HTTP request itself failed (network, DNS, timeout) or the
    /// response body did not decode.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx status code.
    #[error("Translation API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for relay/debugging.
        body: String,
    },
}

/// Response returned by the `/translate` endpoint.
#[derive(Debug, Deserialize)]
struct TranslationResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// HTTP client for a translation service instance.
#[derive(Clone)]
pub struct TranslateClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl TranslateClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Translate one piece of text.
    pub async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        let mut payload = serde_json::json!({
            "q": text,
            "source": source,
            "target": target,
            "format": "text",
        });
        if let Some(key) = &self.api_key {
            payload["api_key"] = Value::String(key.clone());
        }

        let response = self
            .client
            .post(format!("{}/translate", self.base_url))
            .json(&payload)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let decoded = response.json::<TranslationResponse>().await?;
        Ok(decoded.translated_text)
    }

    /// List the languages the endpoint supports, as raw JSON for relay.
    pub async fn languages(&self) -> Result<Value, TranslateError> {
        let response = self
            .client
            .get(format!("{}/languages", self.base_url))
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json::<Value>().await?)
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`TranslateError::Api`] containing the
    /// status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, TranslateError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(TranslateError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slash() {
        let client = TranslateClient::new("http://localhost:5050/", None);
        assert_eq!(client.base_url, "http://localhost:5050");
    }

    #[test]
    fn api_error_display_includes_status_and_body() {
        let err = TranslateError::Api {
            status: 429,
            body: "slow down".into(),
        };
        assert_eq!(
            err.to_string(),
            "Translation API error (429): slow down"
        );
    }
}
