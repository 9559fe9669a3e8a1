//! Produtos API: CRUD REST service for produtos over a single SQLite table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use model::{Mensagem, Produto, ProdutoCreate};
pub use openapi::ApiDoc;
pub use routes::{build_router, health_routes, produto_routes};
pub use service::ProdutoService;
pub use state::AppState;
pub use store::{connect, ensure_produtos_table};
