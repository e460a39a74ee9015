//! API Integration Tests
//!
//! Most tests run the real router over in-memory repositories with a mocked
//! photo API. Tests named `*_postgres` additionally need `DATABASE_URL` and
//! are skipped without it.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;

use futures::future::join_all;
use integration_tests::*;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready_reports_unavailable_store() {
    let server = TestServer::start_with_backend(Backend {
        health: Arc::new(FailingStore),
        ..Backend::in_memory()
    })
    .await
    .unwrap();

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Image Tests
// ============================================================================

#[tokio::test]
async fn test_list_images_uses_listing_endpoint() {
    let server = TestServer::start().await.unwrap();
    mount_listing(&server.provider, &[("img123", 10), ("img124", 3)], 30).await;

    let response = server.get("/api/images?page=1&perPage=12").await.unwrap();
    let body: ImagesBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.images.len(), 2);
    assert_eq!(body.images[0].id, "img123");
    assert_eq!(body.images[0].likes, 10);
    assert!(!body.images[0].liked);
    assert_eq!(body.images[0].tags, vec!["nature"]);
    assert_eq!(body.images[0].user.name, "Mock User");
    assert_eq!(body.images[0].alt_description.as_deref(), Some("Photo img123"));
    assert_eq!(body.total, 30);
    assert_eq!(body.total_pages, 3);
    assert_eq!(body.page, 1);
}

#[tokio::test]
async fn test_search_uses_search_endpoint() {
    let server = TestServer::start().await.unwrap();
    mount_search(&server.provider, "dog", &[("img456", 5)], 1).await;
    Mock::given(method("GET"))
        .and(path("/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server.provider)
        .await;

    let response = server.get("/api/images?q=dog").await.unwrap();
    let body: ImagesBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.images.len(), 1);
    assert_eq!(body.images[0].id, "img456");
    assert_eq!(body.total_pages, 1);
}

#[tokio::test]
async fn test_query_aliases_and_clamping() {
    let server = TestServer::start().await.unwrap();
    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .and(query_param("query", "cat"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [],
            "total": 0,
            "total_pages": 0
        })))
        .expect(1)
        .mount(&server.provider)
        .await;

    let response = server
        .get("/api/images?search=cat&page=0&limit=500")
        .await
        .unwrap();
    let body: ImagesBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.images.is_empty());
    assert_eq!(body.total_pages, 1);
}

#[tokio::test]
async fn test_blank_search_lists() {
    let server = TestServer::start().await.unwrap();
    mount_listing(&server.provider, &[("a", 1)], 1).await;

    let response = server.get("/api/images?search=%20%20&page=").await.unwrap();
    let body: ImagesBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.images[0].id, "a");
}

#[tokio::test]
async fn test_invalid_page_is_rejected() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/images?page=abc").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "INVALID_QUERY_PARAMETER");
}

#[tokio::test]
async fn test_provider_failure_is_generic_500() {
    let server = TestServer::start().await.unwrap();
    Mock::given(method("GET"))
        .and(path("/photos"))
        .respond_with(ResponseTemplate::new(401).set_body_string("OAuth error: invalid token"))
        .mount(&server.provider)
        .await;

    let response = server.get("/api/images").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.message, "Failed to fetch images.");
    assert_eq!(body.code, "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_local_likes_override_provider_likes() {
    let server = TestServer::start().await.unwrap();
    mount_listing(&server.provider, &[("img1", 100), ("img2", 7)], 2).await;

    for _ in 0..3 {
        server.post_empty("/api/images/img1/like").await.unwrap();
    }

    let response = server.get("/api/images").await.unwrap();
    let body: ImagesBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.images[0].likes, 3);
    assert_eq!(body.images[1].likes, 7);
}

// ============================================================================
// Like Tests
// ============================================================================

#[tokio::test]
async fn test_like_counts_up() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_empty("/api/images/img42/like").await.unwrap();
    let body: LikeBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.image_id, "img42");
    assert_eq!(body.likes, 1);

    let response = server.post_empty("/api/images/img42/like").await.unwrap();
    let body: LikeBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.likes, 2);
}

#[tokio::test]
async fn test_like_store_failure() {
    let server = TestServer::start_with_backend(Backend {
        likes: Arc::new(FailingStore),
        ..Backend::in_memory()
    })
    .await
    .unwrap();

    let response = server.post_empty("/api/images/img1/like").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.message, "Failed to like image.");
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_create_comment_on_image() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/comments/img1", &CreateComment::content("Nice!"))
        .await
        .unwrap();
    let comment: CommentBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(comment.id > 0);
    assert_eq!(comment.image_id, "img1");
    assert_eq!(comment.content, "Nice!");
    assert_eq!(comment.user_name, "Anonymous");
    assert!(comment.avatar_url.is_none());
    assert!(!comment.edited);
    assert!(!comment.created_at.is_empty());
}

#[tokio::test]
async fn test_create_comment_with_body_image_id() {
    let server = TestServer::start().await.unwrap();

    let request = CreateComment {
        user_name: Some("Guest".to_string()),
        avatar_url: Some(String::new()),
        ..CreateComment::for_image("img7", "Lovely light")
    };
    let response = server.post("/api/comments", &request).await.unwrap();
    let comment: CommentBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(comment.image_id, "img7");
    assert_eq!(comment.user_name, "Guest");
    assert!(comment.avatar_url.is_none());

    // The nested alias reads the same list
    let response = server.get("/api/images/img7/comments").await.unwrap();
    let comments: Vec<CommentBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 1);
}

#[tokio::test]
async fn test_create_comment_validation() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/comments/img1", &CreateComment::content("  ab  "))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.message, "Comment too short.");

    let response = server
        .post("/api/comments", &CreateComment::content("No image here"))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.message, "Image id is required.");

    let response = server
        .post("/api/comments/img1", &CreateComment::content(&"x".repeat(2001)))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.message, "Comment too long.");

    let response = server.post_raw("/api/comments/img1", "{not json").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "INVALID_BODY");

    // Nothing was written
    let response = server.get("/api/comments/img1").await.unwrap();
    let comments: Vec<CommentBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(comments.is_empty());
}

#[tokio::test]
async fn test_comments_listed_newest_first() {
    let server = TestServer::start().await.unwrap();

    for content in ["first", "second", "third"] {
        let response = server
            .post("/api/comments/img9", &CreateComment::content(content))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get("/api/comments/img9").await.unwrap();
    let comments: Vec<CommentBody> = assert_json(response, StatusCode::OK).await.unwrap();
    let contents: Vec<&str> = comments.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn test_deleted_comment_id_is_not_reused() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/comments/img5", &CreateComment::content("older"))
        .await
        .unwrap();
    let older: CommentBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/comments/img5", &CreateComment::content("newest"))
        .await
        .unwrap();
    let newest: CommentBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete(&format!("/api/comments/{}", newest.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post("/api/comments/img5", &CreateComment::content("replacement"))
        .await
        .unwrap();
    let replacement: CommentBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(replacement.id > newest.id);
    assert_ne!(replacement.id, older.id);

    // The deleted id stays gone
    let response = server
        .patch(
            &format!("/api/comments/{}", newest.id),
            &json!({ "content": "still here?" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_comment() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/comments/img1", &CreateComment::content("original"))
        .await
        .unwrap();
    let created: CommentBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/comments/{}", created.id);

    let response = server.patch(&path, &json!({ "content": "no" })).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.message, "Content too short to update.");

    let response = server
        .patch(&path, &json!({ "content": "edited text" }))
        .await
        .unwrap();
    let updated: UpdatedBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.message, "Comment updated.");
    assert_eq!(updated.content, "edited text");
    assert!(!updated.updated_at.is_empty());

    let response = server.get("/api/comments/img1").await.unwrap();
    let comments: Vec<CommentBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments[0].content, "edited text");
    assert!(comments[0].edited);
}

#[tokio::test]
async fn test_missing_comment_is_not_found() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/comments/img1", &CreateComment::content("keep me"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    for path in ["/api/comments/999", "/api/comments/not-a-number"] {
        let response = server
            .patch(path, &json!({ "content": "ghost edit" }))
            .await
            .unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
        assert_eq!(body.message, "Comment not found.");

        let response = server.delete(path).await.unwrap();
        assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    }

    let response = server.get("/api/comments/img1").await.unwrap();
    let comments: Vec<CommentBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].content, "keep me");
}

#[tokio::test]
async fn test_delete_comment() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/comments/img1", &CreateComment::content("short-lived"))
        .await
        .unwrap();
    let created: CommentBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/comments/{}", created.id);

    let response = server.delete(&path).await.unwrap();
    let body: MessageBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Comment deleted.");

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_comment_store_failure() {
    let server = TestServer::start_with_backend(Backend {
        comments: Arc::new(FailingStore),
        ..Backend::in_memory()
    })
    .await
    .unwrap();

    let response = server.get("/api/comments/img1").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.message, "Failed to load comments.");

    let response = server
        .post("/api/comments/img1", &CreateComment::content("Nice!"))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.message, "Failed to post comment.");
}

// ============================================================================
// Client library against the real server
// ============================================================================

#[tokio::test]
async fn test_client_gallery_round_trip() {
    let server = TestServer::start().await.unwrap();
    mount_listing(&server.provider, &[("img1", 4), ("img2", 0)], 2).await;

    let store = Arc::new(gallery_client::MemoryLikedStore::new());
    let mut gallery = gallery_client::Gallery::new(server.api().unwrap(), store.clone());
    gallery.refresh().await;
    assert_eq!(gallery.status(), gallery_client::GalleryStatus::Loaded);

    gallery.toggle_like("img2").unwrap().await.unwrap();
    assert_eq!(gallery.images()[1].likes, 1);

    // The server now reports its own counter for img2
    gallery.refresh().await;
    assert_eq!(gallery.images()[1].likes, 1);
    assert!(gallery.images()[1].liked);
    assert_eq!(gallery.images()[0].likes, 4);

    let mut panel = gallery_client::CommentPanel::open(server.api().unwrap(), "img2").await;
    panel.set_draft("  What a view  ");
    assert!(panel.submit().await);
    assert_eq!(panel.comments()[0].content, "What a view");
    assert_eq!(panel.comments()[0].author, "Guest");

    let reopened = gallery_client::CommentPanel::open(server.api().unwrap(), "img2").await;
    assert_eq!(reopened.comments().len(), 1);
}

// ============================================================================
// PostgreSQL-backed Tests
// ============================================================================

#[tokio::test]
async fn test_comment_lifecycle_postgres() {
    let Some(server) = TestServer::start_postgres().await.unwrap() else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };
    let image_id = unique_image_id("pg-comment");

    let response = server
        .post(&format!("/api/comments/{image_id}"), &CreateComment::content("Nice!"))
        .await
        .unwrap();
    let created: CommentBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.content, "Nice!");
    assert_eq!(created.image_id, image_id);

    let path = format!("/api/comments/{}", created.id);
    let response = server
        .patch(&path, &json!({ "content": "Still nice" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/api/comments/{image_id}")).await.unwrap();
    let comments: Vec<CommentBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].content, "Still nice");

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_likes_postgres() {
    let Some(server) = TestServer::start_postgres().await.unwrap() else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };
    let image_id = unique_image_id("pg-like");
    let path = format!("/api/images/{image_id}/like");

    const N: usize = 20;
    let responses = join_all((0..N).map(|_| server.post_empty(&path))).await;
    for response in responses {
        assert_status(response.unwrap(), StatusCode::OK).await.unwrap();
    }

    let response = server.post_empty(&path).await.unwrap();
    let body: LikeBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.likes, N as i64 + 1);
}

#[tokio::test]
async fn test_health_ready_postgres() {
    let Some(server) = TestServer::start_postgres().await.unwrap() else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
