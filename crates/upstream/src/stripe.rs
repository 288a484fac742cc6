//! Stripe Terminal client.
//!
//! Covers the handful of Stripe REST calls the in-person payment flow
//! needs: connection tokens for reader discovery, and card-present
//! PaymentIntents with manual capture. Requests are form-encoded as the
//! Stripe API expects; responses (including Stripe's own error bodies)
//! relay verbatim.

use std::time::Duration;

use crate::relay::{Relayed, UpstreamError};

/// HTTP request timeout for Stripe calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Stripe Terminal / PaymentIntents endpoints.
#[derive(Clone)]
pub struct StripeClient {
    client: reqwest::Client,
    api_base: String,
    secret_key: String,
}

impl StripeClient {
    /// Create a new client.
    ///
    /// * `api_base` -- normally `https://api.stripe.com`; overridable so
    ///   tests can point at a stub.
    /// * `secret_key` -- the account's secret API key.
    pub fn new(api_base: impl Into<String>, secret_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");

        let mut api_base = api_base.into();
        while api_base.ends_with('/') {
            api_base.pop();
        }

        Self {
            client,
            api_base,
            secret_key: secret_key.into(),
        }
    }

    /// Create a Terminal connection token for reader discovery.
    ///
    /// `POST /v1/terminal/connection_tokens`.
    pub async fn connection_token(&self) -> Result<Relayed, UpstreamError> {
        self.post_form("/terminal/connection_tokens", &[]).await
    }

    /// Create a card-present PaymentIntent with manual capture.
    ///
    /// `POST /v1/payment_intents`. Amount is in the currency's smallest
    /// unit, as Stripe requires.
    pub async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<Relayed, UpstreamError> {
        self.post_form(
            "/payment_intents",
            &[
                ("amount", amount.to_string()),
                ("currency", currency.to_owned()),
                ("payment_method_types[]", "card_present".to_owned()),
                ("capture_method", "manual".to_owned()),
            ],
        )
        .await
    }

    /// Capture a previously authorized PaymentIntent.
    ///
    /// `POST /v1/payment_intents/{id}/capture`.
    pub async fn capture_payment_intent(&self, id: &str) -> Result<Relayed, UpstreamError> {
        self.post_form(&format!("/payment_intents/{id}/capture"), &[])
            .await
    }

    /// Cancel a PaymentIntent.
    ///
    /// `POST /v1/payment_intents/{id}/cancel`.
    pub async fn cancel_payment_intent(&self, id: &str) -> Result<Relayed, UpstreamError> {
        self.post_form(&format!("/payment_intents/{id}/cancel"), &[])
            .await
    }

    /// Execute a form-encoded POST against `/v1{path}` and capture the
    /// response for relay.
    async fn post_form(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Relayed, UpstreamError> {
        let url = format!("{}/v1{}", self.api_base, path);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(params)
            .send()
            .await?;

        let relayed = Relayed::capture(response).await?;

        tracing::debug!(path, status = %relayed.status, "Stripe request completed");

        Ok(relayed)
    }
}
