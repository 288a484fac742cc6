//! Route definitions for the `/scan` handoff surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::scan;
use crate::state::AppState;

/// Routes mounted at `/scan`.
///
/// ```text
/// POST   /sessions               -> create_session
/// GET    /sessions/{id}          -> get_session (poll)
/// DELETE /sessions/{id}          -> delete_session
/// POST   /sessions/{id}/result   -> submit_result
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(scan::create_session))
        .route(
            "/sessions/{id}",
            get(scan::get_session).delete(scan::delete_session),
        )
        .route("/sessions/{id}/result", post(scan::submit_result))
}
