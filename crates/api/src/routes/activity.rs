//! Route definitions for activities.

use axum::routing::get;
use axum::Router;

use crate::handlers::activity;
use crate::state::AppState;

/// Activity routes mounted at `/activities`.
///
/// ```text
/// GET    /                  -> list_activities
/// POST   /                  -> create_activity
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(activity::list_activities).post(activity::create_activity),
    )
}
