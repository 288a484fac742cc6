//! Route definitions for the `/translate` surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::translate;
use crate::state::AppState;

/// Routes mounted at `/translate`.
///
/// ```text
/// POST /text         -> translate_text
/// POST /html         -> translate_html
/// GET  /languages    -> languages
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/text", post(translate::translate_text))
        .route("/html", post(translate::translate_html))
        .route("/languages", get(translate::languages))
}
