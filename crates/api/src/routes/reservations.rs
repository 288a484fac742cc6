//! Route definitions for the `/reservations` relay surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reservations;
use crate::state::AppState;

/// Routes mounted at `/reservations`.
///
/// ```text
/// GET    /                  -> list (query passthrough)
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// POST   /{id}/pickup       -> record_pickup
/// POST   /{id}/return       -> record_return
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reservations::list).post(reservations::create))
        .route(
            "/{id}",
            get(reservations::get_by_id)
                .put(reservations::update)
                .delete(reservations::delete),
        )
        .route("/{id}/pickup", post(reservations::record_pickup))
        .route("/{id}/return", post(reservations::record_return))
}
