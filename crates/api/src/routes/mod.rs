pub mod admin;
pub mod companies;
pub mod customers;
pub mod health;
pub mod payments;
pub mod reservations;
pub mod scan;
pub mod terminal;
pub mod translate;
pub mod vehicles;
pub mod violations;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /vehicles                                relay: list (query passthrough), create
/// /vehicles/{id}                           relay: get, update, delete
/// /vehicles/{id}/availability              relay (query passthrough)
///
/// /reservations                            relay: list (query passthrough), create
/// /reservations/{id}                       relay: get, update, delete
/// /reservations/{id}/pickup                relay: record pickup (POST)
/// /reservations/{id}/return                relay: record return (POST)
///
/// /customers                               relay: list (query passthrough), create
/// /customers/{id}                          relay: get, update, delete
/// /customers/{id}/reservations             relay: customer history
///
/// /companies                               relay: list, create
/// /companies/{id}                          relay: get, update, delete
/// /companies/{id}/locations                relay: company locations
///
/// /payments                                relay: list (query passthrough)
/// /payments/{id}                           relay: get
/// /payments/{id}/refund                    relay: refund (POST)
///
/// /admin/{*path}                           generic passthrough (any method)
///
/// /terminal/connection_token               Stripe: reader connection token (POST)
/// /terminal/payment_intent                 Stripe: create card-present intent (POST)
/// /terminal/payment_intent/{id}/capture    Stripe: capture (POST)
/// /terminal/payment_intent/{id}/cancel     Stripe: cancel (POST)
///
/// /violations                              relay: list (query passthrough)
/// /violations/{id}                         relay: get
/// /violations/lookup                       external lookup by plate/region (POST)
///
/// /scan/sessions                           create handoff session (POST)
/// /scan/sessions/{id}                      poll session (GET), discard (DELETE)
/// /scan/sessions/{id}/result               submit scanned data (POST)
///
/// /translate/text                          translate plain text (POST)
/// /translate/html                          translate HTML fragment (POST)
/// /translate/languages                     supported languages (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // The mirrored upstream surface, relayed verbatim.
        .nest("/vehicles", vehicles::router())
        .nest("/reservations", reservations::router())
        .nest("/customers", customers::router())
        .nest("/companies", companies::router())
        .nest("/payments", payments::router())
        // Admin endpoints forward wholesale rather than route-by-route.
        .nest("/admin", admin::router())
        // In-person payments via Stripe Terminal.
        .nest("/terminal", terminal::router())
        // Violations: upstream records plus the external lookup service.
        .nest("/violations", violations::router())
        // Locally-owned: phone-to-desktop scan handoff.
        .nest("/scan", scan::router())
        // Locally-owned: translation pipeline.
        .nest("/translate", translate::router())
}
