use std::sync::Arc;
use std::time::Duration;

use rentora_translate::{TranslateClient, Translator};
use rentora_upstream::{StripeClient, UpstreamClient, ViolationsClient};

use crate::config::ServerConfig;
use crate::scan::ScanSessionStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Client for the upstream rental API (relay routes).
    pub upstream: UpstreamClient,
    /// Client for Stripe Terminal payments.
    pub stripe: StripeClient,
    /// Client for the external violations-lookup service.
    pub violations: ViolationsClient,
    /// Paced translation pipeline.
    pub translator: Arc<Translator>,
    /// In-memory scan-session store, pruned by the background sweeper.
    pub scan_sessions: ScanSessionStore,
}

impl AppState {
    /// Construct the state from configuration, building all external-service
    /// clients. Used by both the binary entrypoint and integration tests so
    /// they wire up identically.
    pub fn from_config(config: ServerConfig) -> Self {
        let upstream = UpstreamClient::new(
            &config.upstream_api_url,
            Duration::from_secs(config.upstream_timeout_secs),
        );
        let stripe = StripeClient::new(&config.stripe_api_base, &config.stripe_secret_key);
        let violations =
            ViolationsClient::new(&config.violations_api_url, &config.violations_api_key);
        let translator = Arc::new(Translator::new(TranslateClient::new(
            &config.translate_api_url,
            config.translate_api_key.clone(),
        )));

        Self {
            config: Arc::new(config),
            upstream,
            stripe,
            violations,
            translator,
            scan_sessions: ScanSessionStore::new(),
        }
    }
}
