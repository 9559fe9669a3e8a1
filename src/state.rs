//! Shared application state for all routes.

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    /// Process-lifetime pool. Each request takes its own connection from it.
    pub pool: SqlitePool,
}
