//! One database session per request.

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::pool::PoolConnection;
use sqlx::{Connection, Sqlite, SqliteConnection, Transaction};

/// Connection acquired from the pool before the handler runs. It goes back to the
/// pool when the extractor is dropped, on every exit path of the handler.
pub struct DbSession(PoolConnection<Sqlite>);

#[async_trait]
impl FromRequestParts<AppState> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let conn = state.pool.acquire().await?;
        tracing::trace!("session acquired");
        Ok(DbSession(conn))
    }
}

impl DbSession {
    /// Connection for read-only work.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut *self.0
    }

    /// Start a unit of work. Dropping it without `commit` rolls back.
    pub async fn begin(&mut self) -> Result<Transaction<'_, Sqlite>, AppError> {
        let tx = Connection::begin(&mut *self.0).await?;
        Ok(tx)
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        tracing::trace!("session released");
    }
}
