//! Produto entity and its input/output schemas.

use crate::service::{FieldKind, FieldRule, InputSchema};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted produto. `id` is assigned by the store on insert and never changes.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Produto {
    pub id: i64,
    pub nome: String,
    pub preco: f64,
    pub estoque: i64,
}

/// Payload for create and full-replace update. Any `id` in the body is ignored.
#[derive(Clone, Debug, PartialEq, Deserialize, ToSchema)]
pub struct ProdutoCreate {
    pub nome: String,
    pub preco: f64,
    pub estoque: i64,
}

impl InputSchema for ProdutoCreate {
    fn rules() -> &'static [FieldRule] {
        const RULES: &[FieldRule] = &[
            FieldRule::new("nome", FieldKind::Text),
            FieldRule::new("preco", FieldKind::Number),
            FieldRule::new("estoque", FieldKind::Integer),
        ];
        RULES
    }
}

/// Acknowledgement returned by delete.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct Mensagem {
    pub mensagem: String,
}

impl Mensagem {
    pub fn produto_deletado() -> Self {
        Mensagem {
            mensagem: "Produto deletado com sucesso".into(),
        }
    }
}
