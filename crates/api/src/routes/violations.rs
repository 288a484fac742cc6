//! Route definitions for the `/violations` surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::violations;
use crate::state::AppState;

/// Routes mounted at `/violations`.
///
/// Listing and detail relay to the upstream rental API; `lookup` queries
/// the external violations service directly.
///
/// ```text
/// GET  /          -> list (query passthrough)
/// POST /lookup    -> lookup (by plate and region)
/// GET  /{id}      -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(violations::list))
        // axum matches the literal `/lookup` segment over the `/{id}` capture.
        .route("/lookup", post(violations::lookup))
        .route("/{id}", get(violations::get_by_id))
}
