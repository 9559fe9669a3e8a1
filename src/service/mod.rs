//! ProdutoService: data access for the produtos table, plus boundary validation.

mod produto;
mod validation;
pub use produto::ProdutoService;
pub use validation::{FieldKind, FieldRule, InputSchema, RequestValidator};
