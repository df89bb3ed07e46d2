//! HTTP-level integration tests for the thread endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener, backed by the in-memory store.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_thread, get, memory_app, post_json, post_raw};
use serde_json::json;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_thread_returns_201_with_generated_fields() {
    let (_, app) = memory_app();
    let response = post_json(
        app,
        "/api/threads",
        json!({
            "title": "Career Pivots",
            "description": "Share your career change stories",
            "tags": ["career", "change"],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Career Pivots");
    assert_eq!(json["description"], "Share your career change stories");
    assert_eq!(json["tags"], json!(["career", "change"]));
    assert!(json["id"].is_string());
    assert!(json["createdAt"].is_string());
}

#[tokio::test]
async fn create_thread_without_tags_defaults_to_empty() {
    let (_, app) = memory_app();
    let json = create_thread(app, "No Tags Here").await;
    assert_eq!(json["tags"], json!([]));
}

#[tokio::test]
async fn create_thread_stores_trimmed_values() {
    let (_, app) = memory_app();
    let response = post_json(
        app,
        "/api/threads",
        json!({
            "title": "   Career Pivots  ",
            "description": "\nStories\t",
            "tags": [" career ", "", "  "],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Career Pivots");
    assert_eq!(json["description"], "Stories");
    assert_eq!(json["tags"], json!(["career"]));
}

#[tokio::test]
async fn created_ids_are_distinct() {
    let (_, app) = memory_app();
    let a = create_thread(app.clone(), "First").await;
    let b = create_thread(app, "Second").await;
    assert_ne!(a["id"], b["id"]);
}

#[tokio::test]
async fn missing_title_returns_400_and_persists_nothing() {
    let (store, app) = memory_app();
    let response = post_json(
        app,
        "/api/threads",
        json!({"description": "Share your career change stories"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "title is required");
    assert_eq!(store.thread_count().await, 0);
}

#[tokio::test]
async fn blank_description_returns_400() {
    let (_, app) = memory_app();
    let response = post_json(
        app,
        "/api/threads",
        json!({"title": "Career Pivots", "description": "   "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "description is required");
}

#[tokio::test]
async fn title_length_boundary() {
    let (store, app) = memory_app();

    let ok = post_json(
        app.clone(),
        "/api/threads",
        json!({"title": "a".repeat(200), "description": "d"}),
    )
    .await;
    assert_eq!(ok.status(), StatusCode::CREATED);

    let too_long = post_json(
        app,
        "/api/threads",
        json!({"title": "a".repeat(201), "description": "d"}),
    )
    .await;
    assert_eq!(too_long.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.thread_count().await, 1);
}

#[tokio::test]
async fn description_length_boundary() {
    let (_, app) = memory_app();

    let ok = post_json(
        app.clone(),
        "/api/threads",
        json!({"title": "t", "description": "d".repeat(1000)}),
    )
    .await;
    assert_eq!(ok.status(), StatusCode::CREATED);

    let too_long = post_json(
        app,
        "/api/threads",
        json!({"title": "t", "description": "d".repeat(1001)}),
    )
    .await;
    assert_eq!(too_long.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn too_many_tags_returns_400() {
    let (_, app) = memory_app();
    let tags: Vec<String> = (0..11).map(|i| format!("tag{i}")).collect();
    let response = post_json(
        app,
        "/api/threads",
        json!({"title": "t", "description": "d", "tags": tags}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn tag_length_boundary() {
    let (_, app) = memory_app();

    let ok = post_json(
        app.clone(),
        "/api/threads",
        json!({"title": "t", "description": "d", "tags": ["x".repeat(30)]}),
    )
    .await;
    assert_eq!(ok.status(), StatusCode::CREATED);

    let too_long = post_json(
        app,
        "/api/threads",
        json!({"title": "t", "description": "d", "tags": ["x".repeat(31)]}),
    )
    .await;
    assert_eq!(too_long.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ten_tags_plus_blank_accepted() {
    let (_, app) = memory_app();
    let mut tags: Vec<String> = (0..10).map(|i| format!("tag{i}")).collect();
    tags.push("   ".to_string());

    let response = post_json(
        app,
        "/api/threads",
        json!({"title": "t", "description": "d", "tags": tags}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["tags"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn malformed_json_returns_400_with_message() {
    let (_, app) = memory_app();
    let response = post_raw(app, "/api/threads", "application/json", "{not json".into()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["message"].is_string());
}

#[tokio::test]
async fn wrong_field_type_returns_400() {
    let (_, app) = memory_app();
    let response = post_json(
        app,
        "/api/threads",
        json!({"title": 42, "description": "d"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_thread_by_id() {
    let (_, app) = memory_app();
    let created = create_thread(app.clone(), "Get Me").await;
    let id = created["id"].as_str().unwrap();

    let response = get(app, &format!("/api/threads/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn get_nonexistent_thread_returns_404() {
    let (_, app) = memory_app();
    let response = get(app, "/api/threads/0190a5d2-7c1e-7000-8000-000000000000").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Thread not found");
}

#[tokio::test]
async fn get_malformed_id_returns_404() {
    let (_, app) = memory_app();
    let response = get(app, "/api/threads/not-a-real-id").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_is_repeatable() {
    let (_, app) = memory_app();
    let created = create_thread(app.clone(), "Stable").await;
    let uri = format!("/api/threads/{}", created["id"].as_str().unwrap());

    let first = body_json(get(app.clone(), &uri).await).await;
    let second = body_json(get(app, &uri).await).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn list_threads_newest_first() {
    let (_, app) = memory_app();
    let first = create_thread(app.clone(), "First").await;
    let second = create_thread(app.clone(), "Second").await;
    let third = create_thread(app.clone(), "Third").await;

    let response = get(app, "/api/threads").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let ids: Vec<_> = json.as_array().unwrap().iter().map(|t| t["id"].clone()).collect();
    assert_eq!(ids, vec![third["id"].clone(), second["id"].clone(), first["id"].clone()]);
}

#[tokio::test]
async fn list_threads_empty() {
    let (_, app) = memory_app();
    let response = get(app, "/api/threads").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}
