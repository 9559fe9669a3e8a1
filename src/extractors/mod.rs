//! Request extractors: per-request session, validated JSON body, produto id path.

mod json;
mod path;
mod session;

pub use json::ValidatedJson;
pub use path::ProdutoId;
pub use session::DbSession;
