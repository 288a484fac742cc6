//! Route definitions for the `/admin` passthrough.

use axum::routing::any;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// The admin surface changes often upstream, so instead of mirroring each
/// endpoint the whole subtree forwards wholesale:
///
/// ```text
/// ANY /{*path}    -> forward (method, path, query, and body passthrough)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{*path}", any(admin::forward))
}
