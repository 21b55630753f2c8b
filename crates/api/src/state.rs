use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The pool is the only storage handle; every handler receives it through
/// this struct rather than from a global. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pizzeria_db::DbPool,
    pub config: Arc<ServerConfig>,
}
