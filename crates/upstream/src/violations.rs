//! Client for the external violations-lookup service.
//!
//! Looks up outstanding traffic violations by plate and issuing region.
//! The service authenticates with a static API key header; its responses
//! relay verbatim like every other external call.

use std::time::Duration;

use crate::relay::{Relayed, UpstreamError};

/// HTTP request timeout for lookup calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// API key header the lookup service expects.
const API_KEY_HEADER: &str = "x-api-key";

/// Client for the violations-lookup API.
#[derive(Clone)]
pub struct ViolationsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ViolationsClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
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
            api_key: api_key.into(),
        }
    }

    /// Look up violations for a plate.
    ///
    /// `POST {base}/lookup` with `{ "plate": ..., "region": ... }`.
    pub async fn lookup(&self, plate: &str, region: &str) -> Result<Relayed, UpstreamError> {
        let payload = serde_json::json!({
            "plate": plate,
            "region": region,
        });

        let response = self
            .client
            .post(format!("{}/lookup", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&payload)
            .send()
            .await?;

        let relayed = Relayed::capture(response).await?;

        tracing::debug!(plate, region, status = %relayed.status, "Violations lookup completed");

        Ok(relayed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slash() {
        let client = ViolationsClient::new("http://localhost:6000/", "key");
        assert_eq!(client.base_url, "http://localhost:6000");
    }
}
