//! Produto CRUD handlers: create, list, read, update, delete.

use crate::error::{AppError, ErrorBody, ValidationErrorBody};
use crate::extractors::{DbSession, ProdutoId, ValidatedJson};
use crate::model::{Mensagem, Produto, ProdutoCreate};
use crate::service::ProdutoService;
use axum::Json;

#[utoipa::path(
    post,
    path = "/produtos",
    tag = "produtos",
    request_body = ProdutoCreate,
    responses(
        (status = 200, description = "Produto created", body = Produto),
        (status = 422, description = "Invalid payload", body = ValidationErrorBody)
    )
)]
pub async fn criar_produto(
    mut session: DbSession,
    ValidatedJson(input): ValidatedJson<ProdutoCreate>,
) -> Result<Json<Produto>, AppError> {
    let mut tx = session.begin().await?;
    let produto = ProdutoService::create(&mut *tx, &input).await?;
    tx.commit().await?;
    tracing::info!(id = produto.id, "produto created");
    Ok(Json(produto))
}

#[utoipa::path(
    get,
    path = "/produtos",
    tag = "produtos",
    responses((status = 200, description = "Every produto", body = [Produto]))
)]
pub async fn listar_produtos(mut session: DbSession) -> Result<Json<Vec<Produto>>, AppError> {
    let rows = ProdutoService::list(session.conn()).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/produtos/{produto_id}",
    tag = "produtos",
    params(("produto_id" = i64, Path, description = "Produto id")),
    responses(
        (status = 200, description = "Produto found", body = Produto),
        (status = 404, description = "Produto não encontrado", body = ErrorBody),
        (status = 422, description = "Invalid produto id", body = ValidationErrorBody)
    )
)]
pub async fn obter_produto(
    ProdutoId(id): ProdutoId,
    mut session: DbSession,
) -> Result<Json<Produto>, AppError> {
    let produto = ProdutoService::find(session.conn(), id)
        .await?
        .ok_or_else(AppError::produto_not_found)?;
    Ok(Json(produto))
}

#[utoipa::path(
    put,
    path = "/produtos/{produto_id}",
    tag = "produtos",
    params(("produto_id" = i64, Path, description = "Produto id")),
    request_body = ProdutoCreate,
    responses(
        (status = 200, description = "Produto replaced", body = Produto),
        (status = 404, description = "Produto não encontrado", body = ErrorBody),
        (status = 422, description = "Invalid payload", body = ValidationErrorBody)
    )
)]
pub async fn atualizar_produto(
    ProdutoId(id): ProdutoId,
    mut session: DbSession,
    ValidatedJson(input): ValidatedJson<ProdutoCreate>,
) -> Result<Json<Produto>, AppError> {
    let mut tx = session.begin().await?;
    let produto = ProdutoService::update(&mut *tx, id, &input)
        .await?
        .ok_or_else(AppError::produto_not_found)?;
    tx.commit().await?;
    tracing::info!(id, "produto updated");
    Ok(Json(produto))
}

#[utoipa::path(
    delete,
    path = "/produtos/{produto_id}",
    tag = "produtos",
    params(("produto_id" = i64, Path, description = "Produto id")),
    responses(
        (status = 200, description = "Produto deleted", body = Mensagem),
        (status = 404, description = "Produto não encontrado", body = ErrorBody),
        (status = 422, description = "Invalid produto id", body = ValidationErrorBody)
    )
)]
pub async fn deletar_produto(
    ProdutoId(id): ProdutoId,
    mut session: DbSession,
) -> Result<Json<Mensagem>, AppError> {
    let mut tx = session.begin().await?;
    if !ProdutoService::delete(&mut *tx, id).await? {
        return Err(AppError::produto_not_found());
    }
    tx.commit().await?;
    tracing::info!(id, "produto deleted");
    Ok(Json(Mensagem::produto_deletado()))
}
