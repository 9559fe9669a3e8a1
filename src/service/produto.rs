//! Produto queries against SQLite. Every function runs on the caller's connection,
//! so a handler decides whether it works inside a transaction.

use crate::error::AppError;
use crate::model::{Produto, ProdutoCreate};
use crate::store::PRODUTOS_TABLE;
use sqlx::SqliteConnection;

pub struct ProdutoService;

impl ProdutoService {
    /// Insert one row. Returns it with the store-assigned id.
    pub async fn create(conn: &mut SqliteConnection, input: &ProdutoCreate) -> Result<Produto, AppError> {
        let sql = format!(
            "INSERT INTO {} (nome, preco, estoque) VALUES (?, ?, ?) RETURNING id, nome, preco, estoque",
            PRODUTOS_TABLE
        );
        tracing::debug!(sql = %sql, "query");
        let produto = sqlx::query_as::<_, Produto>(&sql)
            .bind(&input.nome)
            .bind(input.preco)
            .bind(input.estoque)
            .fetch_one(&mut *conn)
            .await?;
        Ok(produto)
    }

    /// All rows in id order. Unbounded.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Produto>, AppError> {
        let sql = format!("SELECT id, nome, preco, estoque FROM {} ORDER BY id", PRODUTOS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Produto>(&sql).fetch_all(&mut *conn).await?;
        Ok(rows)
    }

    pub async fn find(conn: &mut SqliteConnection, id: i64) -> Result<Option<Produto>, AppError> {
        let sql = format!("SELECT id, nome, preco, estoque FROM {} WHERE id = ?", PRODUTOS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Produto>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Overwrite all three data fields of an existing row. None when the id does not exist.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        input: &ProdutoCreate,
    ) -> Result<Option<Produto>, AppError> {
        let sql = format!(
            "UPDATE {} SET nome = ?, preco = ?, estoque = ? WHERE id = ? RETURNING id, nome, preco, estoque",
            PRODUTOS_TABLE
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Produto>(&sql)
            .bind(&input.nome)
            .bind(input.preco)
            .bind(input.estoque)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Hard delete. Returns whether a row was removed.
    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", PRODUTOS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&mut *conn).await?;
        Ok(result.rows_affected() > 0)
    }
}
