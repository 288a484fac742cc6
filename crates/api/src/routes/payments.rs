//! Route definitions for the `/payments` relay surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::payments;
use crate::state::AppState;

/// Routes mounted at `/payments`.
///
/// ```text
/// GET    /                 -> list (query passthrough)
/// GET    /{id}             -> get_by_id
/// POST   /{id}/refund      -> refund
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(payments::list))
        .route("/{id}", get(payments::get_by_id))
        .route("/{id}/refund", post(payments::refund))
}
