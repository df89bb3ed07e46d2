use std::sync::Arc;

use yarn_core::store::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend, chosen once at startup.
    pub store: Arc<dyn Store>,
    pub config: Arc<ServerConfig>,
}
