//! Integration tests for the feed API endpoints.
//!
//! Tests drive Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server, against an in-memory store.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use linkup_api::router::build_router;
use linkup_api::state::AppState;
use serde_json::{Value, json};
use tower::ServiceExt;

fn make_router() -> Router {
    build_router(Arc::new(AppState::in_memory()))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn post_json(router: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

fn post_body(user: &str, content: &str) -> Value {
    json!({
        "userId": user,
        "userName": format!("{user} name"),
        "userTitle": "Member",
        "userAvatar": "https://placehold.co/200x200",
        "content": content,
    })
}

fn comment_body(user: &str, text: &str) -> Value {
    json!({
        "userId": user,
        "userName": format!("{user} name"),
        "userTitle": "",
        "userAvatar": "",
        "text": text,
    })
}

async fn create(router: &Router, user: &str, content: &str) -> String {
    let (status, json) = post_json(router, "/api/posts", &post_body(user, content)).await;
    assert_eq!(status, StatusCode::CREATED);
    json["id"].as_str().unwrap().to_owned()
}

// =========================================================================
// List
// =========================================================================

#[tokio::test]
async fn test_list_empty() {
    let router = make_router();
    let (status, json) = get(&router, "/api/posts").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_list_newest_first() {
    let router = make_router();
    let first = create(&router, "user_a", "one").await;
    let second = create(&router, "user_b", "two").await;
    let third = create(&router, "user_a", "three").await;

    let (status, json) = get(&router, "/api/posts").await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, [third.as_str(), second.as_str(), first.as_str()]);
}

// =========================================================================
// Create
// =========================================================================

#[tokio::test]
async fn test_create_post() {
    let router = make_router();
    let (status, json) = post_json(&router, "/api/posts", &post_body("user_a", "hi")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["userId"], "user_a");
    assert_eq!(json["userName"], "user_a name");
    assert_eq!(json["content"], "hi");
    assert_eq!(json["likes"], json!([]));
    assert_eq!(json["comments"], json!([]));
    assert!(json["id"].is_string());
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_create_post_defaults_optional_fields() {
    let router = make_router();
    let body = json!({"userId": "user_a", "userName": "Alice", "content": "hi"});
    let (status, json) = post_json(&router, "/api/posts", &body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["userTitle"], "");
    assert_eq!(json["userAvatar"], "");
}

#[tokio::test]
async fn test_create_post_empty_content_rejected() {
    let router = make_router();
    let (status, json) = post_json(&router, "/api/posts", &post_body("user_a", "")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "content is required");
    assert_eq!(json["status"], 400);

    let (_, listed) = get(&router, "/api/posts").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_create_post_missing_identity_rejected() {
    let router = make_router();
    let (status, json) = post_json(&router, "/api/posts", &json!({"content": "hi"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("userId is required"));
}

#[tokio::test]
async fn test_create_post_malformed_body() {
    let router = make_router();
    let response = router
        .oneshot(
            Request::post("/api/posts")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["message"].is_string());
}

// =========================================================================
// Like
// =========================================================================

#[tokio::test]
async fn test_like_toggles() {
    let router = make_router();
    let id = create(&router, "user_a", "hi").await;
    let uri = format!("/api/posts/{id}/like");

    let (status, json) = post_json(&router, &uri, &json!({"userId": "user_b"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["likes"], json!(["user_b"]));

    let (status, json) = post_json(&router, &uri, &json!({"userId": "user_b"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["likes"], json!([]));
}

#[tokio::test]
async fn test_like_from_two_users() {
    let router = make_router();
    let id = create(&router, "user_a", "hi").await;
    let uri = format!("/api/posts/{id}/like");

    post_json(&router, &uri, &json!({"userId": "user_b"})).await;
    let (_, json) = post_json(&router, &uri, &json!({"userId": "user_c"})).await;
    assert_eq!(json["likes"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_like_unknown_post() {
    let router = make_router();
    let uri = "/api/posts/0190b2c4-0000-7000-8000-000000000000/like";
    let (status, json) = post_json(&router, uri, &json!({"userId": "user_b"})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
    assert!(json["message"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_like_malformed_id_is_not_found() {
    let router = make_router();
    let (status, _) = post_json(&router, "/api/posts/abc/like", &json!({"userId": "u"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_like_missing_user_rejected() {
    let router = make_router();
    let id = create(&router, "user_a", "hi").await;
    let (status, _) = post_json(&router, &format!("/api/posts/{id}/like"), &json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =========================================================================
// Comment
// =========================================================================

#[tokio::test]
async fn test_add_comments_in_order() {
    let router = make_router();
    let id = create(&router, "user_a", "hi").await;
    let uri = format!("/api/posts/{id}/comment");

    let (status, _) = post_json(&router, &uri, &comment_body("user_b", "first")).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, json) = post_json(&router, &uri, &comment_body("user_c", "second")).await;
    assert_eq!(status, StatusCode::CREATED);

    let comments = json["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["text"], "first");
    assert_eq!(comments[0]["userId"], "user_b");
    assert_eq!(comments[1]["text"], "second");
    assert!(comments[1]["timestamp"].is_string());

    let (_, listed) = get(&router, "/api/posts").await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_comment_unknown_post() {
    let router = make_router();
    let uri = "/api/posts/0190b2c4-0000-7000-8000-000000000000/comment";
    let (status, _) = post_json(&router, uri, &comment_body("user_b", "hello")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_comment_empty_text_rejected() {
    let router = make_router();
    let id = create(&router, "user_a", "hi").await;
    let uri = format!("/api/posts/{id}/comment");

    let (status, json) = post_json(&router, &uri, &comment_body("user_b", "  ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "text is required");

    let (_, listed) = get(&router, "/api/posts").await;
    assert_eq!(listed[0]["comments"], json!([]));
}

// =========================================================================
// Scenarios
// =========================================================================

#[tokio::test]
async fn test_like_twice_scenario() {
    let router = make_router();
    let id = create(&router, "user_a", "hi").await;
    let uri = format!("/api/posts/{id}/like");

    post_json(&router, &uri, &json!({"userId": "user_b"})).await;
    post_json(&router, &uri, &json!({"userId": "user_b"})).await;

    let (_, listed) = get(&router, "/api/posts").await;
    assert_eq!(listed[0]["likes"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let router = make_router();
    let response = router
        .oneshot(
            Request::get("/api/posts")
                .header(header::ORIGIN, "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}
