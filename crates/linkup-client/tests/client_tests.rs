//! End-to-end tests for the feed client.
//!
//! Each test serves the real router on an ephemeral port with an in-memory
//! store and drives it through [`FeedClient`].

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use linkup_api::{AppState, serve};
use linkup_client::render::{LOAD_FAILED, NO_COMMENTS, NO_POSTS};
use linkup_client::{ClientConfig, ClientError, FeedClient, FeedView, Session};
use linkup_types::{NewPost, Post, PostId};
use serde_json::json;
use tokio::net::TcpListener;

async fn spawn_server() -> ClientConfig {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = Arc::new(AppState::in_memory());
    tokio::spawn(serve(listener, state, std::future::pending()));
    ClientConfig::new(&format!("http://{addr}/api"))
}

/// A server that accepts every create but fails every listing.
async fn spawn_failing_list_server() -> ClientConfig {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new().route(
        "/api/posts",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "db down", "status": 500})),
            )
        })
        .post(|Json(request): Json<NewPost>| async move {
            let post = Post::from_request(PostId::new(), request, Utc::now());
            (StatusCode::CREATED, Json(post))
        }),
    );
    tokio::spawn(async move { axum::serve(listener, app).await });
    ClientConfig::new(&format!("http://{addr}/api"))
}

async fn signed_in_client() -> FeedClient {
    let config = spawn_server().await;
    let mut client = FeedClient::new(&config);
    client.login().await.unwrap();
    client
}

fn feed_contents(client: &FeedClient) -> Vec<String> {
    match client.feed_view(Utc::now()) {
        FeedView::Posts(cards) => cards.into_iter().map(|c| c.content).collect(),
        other => panic!("expected posts, got {other:?}"),
    }
}

#[tokio::test]
async fn login_shows_empty_feed() {
    let client = signed_in_client().await;

    assert!(client.session().is_authenticated());
    let feed = client.feed_view(Utc::now());
    assert_eq!(feed, FeedView::Posts(Vec::new()));
    assert_eq!(feed.placeholder(), Some(NO_POSTS));
}

#[tokio::test]
async fn create_post_refreshes_feed() {
    let mut client = signed_in_client().await;

    client.create_post("  first  ").await.unwrap();
    let created = client.create_post("second").await.unwrap();
    assert_eq!(created.user_id.as_str(), "user_12345");
    assert_eq!(created.user_name, "Demo User");

    assert_eq!(feed_contents(&client), ["second", "first"]);
    assert_eq!(client.cache().len(), 2);
}

#[tokio::test]
async fn empty_content_is_rejected_locally() {
    let mut client = signed_in_client().await;

    let result = client.create_post("   ").await;
    assert!(matches!(result, Err(ClientError::EmptyInput(_))));
    assert!(client.cache().is_empty());
}

#[tokio::test]
async fn like_twice_returns_to_unliked() {
    let mut client = signed_in_client().await;
    let post = client.create_post("hi").await.unwrap();

    let liked = client.toggle_like(post.id).await.unwrap();
    assert_eq!(liked.like_count(), 1);
    let card = match client.feed_view(Utc::now()) {
        FeedView::Posts(cards) => cards.into_iter().next().unwrap(),
        other => panic!("expected posts, got {other:?}"),
    };
    assert!(card.liked_by_viewer);
    assert_eq!(card.like_count, 1);

    let unliked = client.toggle_like(post.id).await.unwrap();
    assert_eq!(unliked.like_count(), 0);
    assert_eq!(client.cache().get(&post.id).map(|p| p.like_count()), Some(0));
}

#[tokio::test]
async fn likes_from_two_sessions_accumulate() {
    let config = spawn_server().await;
    let mut alice = FeedClient::new(&config);
    alice.login().await.unwrap();
    let post = alice.create_post("hello").await.unwrap();

    let mut bob = FeedClient::new(&config);
    bob.signup("Bob").await.unwrap();
    bob.toggle_like(post.id).await.unwrap();
    let updated = alice.toggle_like(post.id).await.unwrap();

    assert_eq!(updated.like_count(), 2);
}

#[tokio::test]
async fn comments_render_oldest_first() {
    let mut client = signed_in_client().await;
    let post = client.create_post("hi").await.unwrap();

    client.open_comments(post.id).unwrap();
    let view = client.comments_view(Utc::now()).unwrap();
    assert_eq!(view.heading, "Comments on Demo User's post");
    assert_eq!(view.placeholder(), Some(NO_COMMENTS));

    client.add_comment(post.id, "one").await.unwrap();
    client.add_comment(post.id, " two ").await.unwrap();

    let view = client.comments_view(Utc::now()).unwrap();
    let texts: Vec<&str> = view.comments.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["one", "two"]);
    assert_eq!(feed_contents(&client), ["hi"]);

    client.close_comments();
    assert!(client.comments_view(Utc::now()).is_none());
}

#[tokio::test]
async fn profile_lists_own_posts_only() {
    let config = spawn_server().await;
    let mut other = FeedClient::new(&config);
    other.signup("Grace").await.unwrap();
    other.create_post("not mine").await.unwrap();

    let mut client = FeedClient::new(&config);
    client.login().await.unwrap();
    assert_eq!(
        client.profile_view(Utc::now()).unwrap().placeholder(),
        Some(NO_POSTS)
    );

    client.create_post("mine").await.unwrap();
    let profile = client.profile_view(Utc::now()).unwrap();
    assert_eq!(profile.name, "Demo User");
    assert_eq!(profile.posts.len(), 1);
    assert_eq!(profile.posts[0].content, "mine");
    assert_eq!(feed_contents(&client).len(), 2);
}

#[tokio::test]
async fn logout_clears_state() {
    let mut client = signed_in_client().await;
    let post = client.create_post("hi").await.unwrap();
    client.open_comments(post.id).unwrap();

    client.logout();

    assert_eq!(client.session(), &Session::Unauthenticated);
    assert!(client.cache().is_empty());
    assert_eq!(client.feed_view(Utc::now()), FeedView::Hidden);
    assert!(client.profile_view(Utc::now()).is_none());
    assert!(client.comments_view(Utc::now()).is_none());
}

#[tokio::test]
async fn mutations_require_session() {
    let config = spawn_server().await;
    let mut client = FeedClient::new(&config);

    assert!(matches!(
        client.create_post("hi").await,
        Err(ClientError::NotAuthenticated)
    ));
    assert!(matches!(
        client.refresh().await,
        Err(ClientError::NotAuthenticated)
    ));
    assert!(matches!(
        client.toggle_like(PostId::new()).await,
        Err(ClientError::NotAuthenticated)
    ));
}

#[tokio::test]
async fn unknown_post_surfaces_not_found() {
    let mut client = signed_in_client().await;
    let missing = PostId::new();

    let result = client.toggle_like(missing).await;
    assert!(matches!(result, Err(ClientError::Status { status: 404, .. })));
    assert!(matches!(
        client.open_comments(missing),
        Err(ClientError::UnknownPost(_))
    ));
}

#[tokio::test]
async fn unreachable_server_shows_placeholder() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut client = FeedClient::new(&ClientConfig::new(&format!("http://{addr}/api")));
    let result = client.login().await;

    assert!(matches!(result, Err(ClientError::Transport(_))));
    assert!(client.session().is_authenticated());
    let feed = client.feed_view(Utc::now());
    assert_eq!(feed.placeholder(), Some(LOAD_FAILED));
}

#[tokio::test]
async fn create_succeeds_when_reload_fails() {
    let config = spawn_failing_list_server().await;
    let mut client = FeedClient::new(&config);
    assert!(matches!(
        client.login().await,
        Err(ClientError::Status { status: 500, .. })
    ));

    let created = client.create_post("hello").await.unwrap();
    assert_eq!(created.content, "hello");
    assert_eq!(created.user_id.as_str(), "user_12345");

    assert_eq!(
        client.feed_view(Utc::now()),
        FeedView::Unavailable(LOAD_FAILED.to_owned())
    );
}
