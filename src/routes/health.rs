//! Liveness and readiness probes for the produtos service.

use crate::state::AppState;
use crate::store::PRODUTOS_TABLE;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Liveness {
    status: &'static str,
}

/// `store` is `ok` when the pool answers and the produtos table has been bootstrapped.
#[derive(Debug, Serialize)]
struct Readiness {
    status: &'static str,
    store: &'static str,
}

async fn live() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let probe: Result<Option<(String,)>, sqlx::Error> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(PRODUTOS_TABLE)
            .fetch_optional(&state.pool)
            .await;
    let store = match probe {
        Ok(Some(_)) => "ok",
        Ok(None) => "missing_table",
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            "unavailable"
        }
    };
    if store == "ok" {
        (StatusCode::OK, Json(Readiness { status: "ok", store }))
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(Readiness { status: "degraded", store }))
    }
}

/// GET /health (process alive) and GET /ready (store reachable and bootstrapped).
pub fn health_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .with_state(state)
}
