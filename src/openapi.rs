//! OpenAPI document for the produto routes.

use crate::error::{ErrorBody, FieldError, ValidationErrorBody};
use crate::handlers::produto;
use crate::model::{Mensagem, Produto, ProdutoCreate};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Produtos API", description = "CRUD for produtos backed by SQLite"),
    paths(
        produto::criar_produto,
        produto::listar_produtos,
        produto::obter_produto,
        produto::atualizar_produto,
        produto::deletar_produto
    ),
    components(schemas(Produto, ProdutoCreate, Mensagem, ErrorBody, ValidationErrorBody, FieldError)),
    tags((name = "produtos", description = "Produto CRUD"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /openapi.json
pub fn openapi_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}
