use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Handlers borrow it per query; connections
    /// are returned to the pool when each query finishes.
    pub pool: oasis_db::DbPool,
    /// Server configuration, loaded once at startup and read-only afterwards.
    pub config: Arc<ServerConfig>,
}
