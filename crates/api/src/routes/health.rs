use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Service metadata returned at the root path.
#[derive(Serialize, ToSchema)]
pub struct RootResponse {
    /// Configured application name.
    pub name: String,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Path of the API documentation.
    pub docs: &'static str,
}

/// GET /health -- liveness only. Answers from memory and never touches the
/// database, so it stays `ok` while the database is down.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET / -- static service metadata.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Service metadata", body = RootResponse))
)]
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        name: state.config.app_name.clone(),
        version: env!("CARGO_PKG_VERSION"),
        docs: super::docs::DOCS_PATH,
    })
}

/// Mount health and metadata routes at the root level.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
}
