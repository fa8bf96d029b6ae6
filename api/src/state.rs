//! Application state shared across Axum route handlers.
//!
//! Holds the database pool and the configuration resolved at startup. It is
//! cheap to clone and passed into handlers via Axum's `State<T>` extractor.

use common::AppConfig;
use sqlx::SqlitePool;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: SqlitePool,
    config: AppConfig,
}

impl AppState {
    /// Creates a new `AppState` from the startup-resolved dependencies.
    pub fn new(db: SqlitePool, config: AppConfig) -> Self {
        Self { db, config }
    }

    /// Returns a shared reference to the connection pool.
    pub fn db(&self) -> &SqlitePool {
        &self.db
    }

    /// Returns the startup configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
