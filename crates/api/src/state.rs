use std::sync::Arc;

use catalog_core::Catalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The catalog is
/// immutable after startup, so sharing it across request tasks needs no
/// locking.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory record catalog, built once at startup.
    pub catalog: Arc<Catalog>,
    /// Server configuration (bind address, CORS origins, timeouts).
    pub config: Arc<ServerConfig>,
}
