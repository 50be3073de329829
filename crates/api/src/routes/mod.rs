pub mod activity;
pub mod docs;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /activities                                      list, create
/// ```
///
/// `/health` and `/` are mounted separately by [`health::router`], and the
/// API documentation by [`docs::router`].
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/activities", activity::router())
}
