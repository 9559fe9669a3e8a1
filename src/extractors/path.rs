//! `{produto_id}` path parameter.

use crate::error::{AppError, FieldError};
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Integer produto id from the path. Anything else, including padded digits, is a
/// validation error.
#[derive(Clone, Copy, Debug)]
pub struct ProdutoId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ProdutoId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::invalid(FieldError::new(&["path", "produto_id"], e.body_text(), "value_error")))?;
        raw.parse::<i64>().map(ProdutoId).map_err(|_| {
            AppError::invalid(FieldError::new(
                &["path", "produto_id"],
                "value is not a valid integer",
                "type_error.integer",
            ))
        })
    }
}
