use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once by [`crate::bootstrap`] and cloned per request; the pool and
/// config are both cheap to clone.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool shared by every repository call.
    pub pool: discog_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
