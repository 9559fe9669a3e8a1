//! Produto CRUD routes.

use crate::handlers::{atualizar_produto, criar_produto, deletar_produto, listar_produtos, obter_produto};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn produto_routes(state: AppState) -> Router {
    Router::new()
        .route("/produtos", get(listar_produtos).post(criar_produto))
        .route(
            "/produtos/:produto_id",
            get(obter_produto).put(atualizar_produto).delete(deletar_produto),
        )
        .with_state(state)
}
