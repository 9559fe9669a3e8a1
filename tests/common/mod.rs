//! Shared helpers: router over a temporary SQLite file and a JSON request helper.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use produtos_api::{build_router, connect, ensure_produtos_table, AppState, ServerConfig};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    _dir: TempDir,
}

pub async fn test_app() -> TestApp {
    test_app_with(|_| {}).await
}

/// Like `test_app`, with a hook to adjust pool size or body limit first.
pub async fn test_app_with(adjust: impl FnOnce(&mut ServerConfig)) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let mut config = ServerConfig {
        database_url: format!("sqlite://{}", dir.path().join("produtos.db").display()),
        ..ServerConfig::default()
    };
    adjust(&mut config);
    let pool = connect(&config).await.unwrap();
    ensure_produtos_table(&pool).await.unwrap();
    let router = build_router(AppState { pool: pool.clone() }, config.body_limit);
    TestApp {
        router,
        pool,
        _dir: dir,
    }
}

impl TestApp {
    /// Send a request with an optional JSON body; returns status and parsed JSON body.
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn row_count(&self) -> i64 {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM produtos")
            .fetch_one(&self.pool)
            .await
            .unwrap();
        n
    }
}
