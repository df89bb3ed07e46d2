#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use yarn_api::config::{LogFormat, ServerConfig};
use yarn_api::router::build_app_router;
use yarn_api::state::AppState;
use yarn_core::store::Store;
use yarn_core::validation::ValidationPolicy;
use yarn_db::MemoryStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
        validation: ValidationPolicy::default(),
        log_format: LogFormat::Text,
    }
}

/// Build the full application router over the given store, using the same
/// middleware stack as production.
pub fn build_test_app(store: Arc<dyn Store>) -> Router {
    build_test_app_with(store, test_config())
}

pub fn build_test_app_with(store: Arc<dyn Store>, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A fresh in-memory store plus a router over it.
pub fn memory_app() -> (Arc<MemoryStore>, Router) {
    let store = Arc::new(MemoryStore::new());
    let app = build_test_app(store.clone());
    (store, app)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, payload: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, "application/json", payload.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: String) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a thread through the API and return its JSON.
pub async fn create_thread(app: Router, title: &str) -> serde_json::Value {
    let response = post_json(
        app,
        "/api/threads",
        serde_json::json!({
            "title": title,
            "description": "Share your career change stories",
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
