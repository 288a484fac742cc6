//! Route definitions for the `/companies` relay surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::companies;
use crate::state::AppState;

/// Routes mounted at `/companies`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update
/// DELETE /{id}                -> delete
/// GET    /{id}/locations      -> locations
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(companies::list).post(companies::create))
        .route(
            "/{id}",
            get(companies::get_by_id)
                .put(companies::update)
                .delete(companies::delete),
        )
        .route("/{id}/locations", get(companies::locations))
}
