//! Application state management for hilo.
//!
//! This module defines the shared state that is passed to all handlers,
//! containing the configuration and the database connection pool.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::config::Config;

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Read-only connection pool over the SQLite dataset
    pub pool: SqlitePool,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
