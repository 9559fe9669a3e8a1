//! SQLite engine setup and the startup table bootstrap.

use crate::config::ServerConfig;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub const PRODUTOS_TABLE: &str = "produtos";

/// Open the shared pool. The database file is created if it does not exist yet.
pub async fn connect(config: &ServerConfig) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;
    tracing::info!(url = %config.database_url, max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}

/// Create the produtos table when absent. Safe to call on every startup.
pub async fn ensure_produtos_table(pool: &SqlitePool) -> Result<(), AppError> {
    let existing: Option<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(PRODUTOS_TABLE)
            .fetch_optional(pool)
            .await?;
    if existing.is_some() {
        tracing::info!(table = PRODUTOS_TABLE, "table already present");
        return Ok(());
    }

    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL,
            preco REAL NOT NULL,
            estoque INTEGER NOT NULL
        )
        "#,
        PRODUTOS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    let index = format!(
        "CREATE INDEX IF NOT EXISTS ix_{0}_id ON {0} (id)",
        PRODUTOS_TABLE
    );
    sqlx::query(&index).execute(pool).await?;
    tracing::info!(table = PRODUTOS_TABLE, "table created");
    Ok(())
}
