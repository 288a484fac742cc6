//! Route definitions for the `/vehicles` relay surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::vehicles;
use crate::state::AppState;

/// Routes mounted at `/vehicles`.
///
/// ```text
/// GET    /                      -> list (query passthrough, keys normalized)
/// POST   /                      -> create
/// GET    /{id}                  -> get_by_id (keys normalized)
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
/// GET    /{id}/availability     -> availability (query passthrough)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(vehicles::list).post(vehicles::create))
        .route(
            "/{id}",
            get(vehicles::get_by_id)
                .put(vehicles::update)
                .delete(vehicles::delete),
        )
        .route("/{id}/availability", get(vehicles::availability))
}
