//! HTTP handlers for produto CRUD.

pub mod produto;
pub use produto::*;
