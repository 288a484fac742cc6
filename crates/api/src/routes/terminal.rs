//! Route definitions for the `/terminal` (Stripe in-person payment) surface.

use axum::routing::post;
use axum::Router;

use crate::handlers::terminal;
use crate::state::AppState;

/// Routes mounted at `/terminal`.
///
/// ```text
/// POST /connection_token             -> connection_token
/// POST /payment_intent               -> create_payment_intent
/// POST /payment_intent/{id}/capture  -> capture_payment_intent
/// POST /payment_intent/{id}/cancel   -> cancel_payment_intent
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/connection_token", post(terminal::connection_token))
        .route("/payment_intent", post(terminal::create_payment_intent))
        .route(
            "/payment_intent/{id}/capture",
            post(terminal::capture_payment_intent),
        )
        .route(
            "/payment_intent/{id}/cancel",
            post(terminal::cancel_payment_intent),
        )
}
