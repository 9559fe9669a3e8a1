//! Route tables and the assembled application router.

mod health;
mod produto;

pub use health::health_routes;
pub use produto::produto_routes;

use crate::openapi::openapi_routes;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full application: health probes, produto CRUD, OpenAPI document, request tracing.
/// Bodies over `body_limit` bytes are rejected by the body extractor with a JSON 413.
pub fn build_router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(health_routes(state.clone()))
        .merge(produto_routes(state))
        .merge(openapi_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
}
