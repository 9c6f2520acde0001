use std::sync::Arc;

use ecoconnect_core::clock::Clock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ecoconnect_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Time source. Production uses the system clock; tests pin an instant
    /// so date-window and join-cutoff behavior is deterministic.
    pub clock: Arc<dyn Clock>,
}
