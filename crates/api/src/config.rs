/// Gateway configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL of the upstream rental API.
    pub upstream_api_url: String,
    /// Timeout for upstream rental API calls, in seconds (default: `30`).
    pub upstream_timeout_secs: u64,
    /// Base URL of the Stripe API (overridable so tests can stub it).
    pub stripe_api_base: String,
    /// Stripe secret API key. Empty disables nothing -- Stripe rejects the
    /// calls itself and the rejection relays back to the client.
    pub stripe_secret_key: String,
    /// Base URL of the external violations-lookup service.
    pub violations_api_url: String,
    /// API key for the violations-lookup service.
    pub violations_api_key: String,
    /// Base URL of the translation endpoint.
    pub translate_api_url: String,
    /// Optional API key for the translation endpoint.
    pub translate_api_key: Option<String>,
    /// Lifetime of a scan session in seconds (default: `600`).
    pub scan_session_ttl_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `4000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `UPSTREAM_API_URL`       | `http://localhost:5000`    |
    /// | `UPSTREAM_TIMEOUT_SECS`  | `30`                       |
    /// | `STRIPE_API_BASE`        | `https://api.stripe.com`   |
    /// | `STRIPE_SECRET_KEY`      | (empty)                    |
    /// | `VIOLATIONS_API_URL`     | `http://localhost:6000`    |
    /// | `VIOLATIONS_API_KEY`     | (empty)                    |
    /// | `TRANSLATE_API_URL`      | `http://localhost:5050`    |
    /// | `TRANSLATE_API_KEY`      | (unset)                    |
    /// | `SCAN_SESSION_TTL_SECS`  | `600`                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "4000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upstream_api_url =
            std::env::var("UPSTREAM_API_URL").unwrap_or_else(|_| "http://localhost:5000".into());

        let upstream_timeout_secs: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64");

        let stripe_api_base =
            std::env::var("STRIPE_API_BASE").unwrap_or_else(|_| "https://api.stripe.com".into());

        let stripe_secret_key = std::env::var("STRIPE_SECRET_KEY").unwrap_or_default();

        let violations_api_url =
            std::env::var("VIOLATIONS_API_URL").unwrap_or_else(|_| "http://localhost:6000".into());

        let violations_api_key = std::env::var("VIOLATIONS_API_KEY").unwrap_or_default();

        let translate_api_url =
            std::env::var("TRANSLATE_API_URL").unwrap_or_else(|_| "http://localhost:5050".into());

        let translate_api_key = std::env::var("TRANSLATE_API_KEY").ok();

        let scan_session_ttl_secs: u64 = std::env::var("SCAN_SESSION_TTL_SECS")
            .unwrap_or_else(|_| "600".into())
            .parse()
            .expect("SCAN_SESSION_TTL_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upstream_api_url,
            upstream_timeout_secs,
            stripe_api_base,
            stripe_secret_key,
            violations_api_url,
            violations_api_key,
            translate_api_url,
            translate_api_key,
            scan_session_ttl_secs,
        }
    }
}
