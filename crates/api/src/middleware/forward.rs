//! Extraction of forwardable credentials from incoming requests.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use rentora_upstream::{ForwardedAuth, TENANT_HEADER};

/// Credentials to forward upstream, extracted from the incoming request.
///
/// Use this as an extractor parameter in any relay handler:
///
/// ```ignore
/// async fn my_handler(forwarded: Forwarded) -> AppResult<Response> {
///     let relayed = state.upstream.get("/vehicles", None, &forwarded.auth).await?;
///     Ok(relay(relayed))
/// }
/// ```
///
/// Extraction never fails: a request without credentials forwards without
/// them, and the upstream API's 401 relays back like any other response.
/// The gateway itself never validates tokens.
#[derive(Debug, Clone, Default)]
pub struct Forwarded {
    /// Bearer token and tenant header in the shape the upstream client takes.
    pub auth: ForwardedAuth,
}

impl Forwarded {
    /// Pull the bearer token and tenant header out of a header map.
    fn from_headers(headers: &HeaderMap) -> Self {
        let bearer = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::to_owned);

        let company_id = headers
            .get(TENANT_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        Self {
            auth: ForwardedAuth { bearer, company_id },
        }
    }
}

impl<S> FromRequestParts<S> for Forwarded
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
