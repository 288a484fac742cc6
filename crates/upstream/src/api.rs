//! REST client for the upstream rental API.
//!
//! Every domain route in the gateway forwards here: same path, same query
//! string, same JSON body, plus the caller's bearer token and tenant header
//! when present. Responses come back as [`Relayed`] values for verbatim
//! relay to the web client.

use std::time::Duration;

use reqwest::Method;
use serde_json::Value;

use crate::relay::{Relayed, UpstreamError};

/// Header carrying the tenant (company) context through the gateway.
pub const TENANT_HEADER: &str = "x-company-id";

/// Credentials copied from the incoming request for forwarding.
///
/// The gateway never validates these -- the upstream API owns auth, and an
/// upstream 401 relays back to the client like any other response.
#[derive(Debug, Clone, Default)]
pub struct ForwardedAuth {
    /// Bearer token from the `Authorization` header, without the prefix.
    pub bearer: Option<String>,
    /// Tenant id from the `x-company-id` header.
    pub company_id: Option<String>,
}

/// HTTP client for the upstream rental API.
#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a new client for the given base URL.
    ///
    /// A trailing slash on `base_url` is trimmed so joined paths never
    /// produce `//`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self::with_client(client, base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across clients).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// Forward a request and capture the response for relay.
    ///
    /// * `path` -- upstream path starting with `/`.
    /// * `query` -- raw query string to append verbatim, if any.
    /// * `auth` -- bearer token / tenant header to copy over.
    /// * `body` -- JSON body for methods that carry one.
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        auth: &ForwardedAuth,
        body: Option<&Value>,
    ) -> Result<Relayed, UpstreamError> {
        let mut url = format!("{}{}", self.base_url, path);
        if let Some(query) = query {
            url.push('?');
            url.push_str(query);
        }

        let mut request = self.client.request(method.clone(), &url);
        if let Some(token) = &auth.bearer {
            request = request.bearer_auth(token);
        }
        if let Some(company_id) = &auth.company_id {
            request = request.header(TENANT_HEADER, company_id);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let relayed = Relayed::capture(response).await?;

        tracing::debug!(%method, %url, status = %relayed.status, "Forwarded upstream request");

        Ok(relayed)
    }

    /// GET `path` with an optional raw query string.
    pub async fn get(
        &self,
        path: &str,
        query: Option<&str>,
        auth: &ForwardedAuth,
    ) -> Result<Relayed, UpstreamError> {
        self.forward(Method::GET, path, query, auth, None).await
    }

    /// POST `body` to `path`.
    pub async fn post(
        &self,
        path: &str,
        auth: &ForwardedAuth,
        body: &Value,
    ) -> Result<Relayed, UpstreamError> {
        self.forward(Method::POST, path, None, auth, Some(body)).await
    }

    /// POST to `path` with no body (status-transition endpoints).
    pub async fn post_empty(
        &self,
        path: &str,
        auth: &ForwardedAuth,
    ) -> Result<Relayed, UpstreamError> {
        self.forward(Method::POST, path, None, auth, None).await
    }

    /// PUT `body` to `path`.
    pub async fn put(
        &self,
        path: &str,
        auth: &ForwardedAuth,
        body: &Value,
    ) -> Result<Relayed, UpstreamError> {
        self.forward(Method::PUT, path, None, auth, Some(body)).await
    }

    /// DELETE `path`.
    pub async fn delete(&self, path: &str, auth: &ForwardedAuth) -> Result<Relayed, UpstreamError> {
        self.forward(Method::DELETE, path, None, auth, None).await
    }

    /// Probe upstream health. `true` when `GET {base}/health` returns 2xx.
    pub async fn ping(&self) -> bool {
        match self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, "Upstream health probe failed");
                false
            }
        }
    }
}
