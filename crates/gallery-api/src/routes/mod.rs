//! Route definitions
//!
//! Gallery routes are mounted under /api; health routes sit at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{comments, health, images, likes};
use crate::state::AppState;

/// Create the API router (health routes excluded so they bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new().merge(image_routes()).merge(comment_routes())
}

/// Image listing and likes, plus comment aliases nested under an image
fn image_routes() -> Router<AppState> {
    Router::new()
        .route("/images", get(images::list_images))
        .route("/images/:id/like", post(likes::like_image))
        .route(
            "/images/:id/comments",
            get(comments::list_comments).post(comments::create_comment_for_image),
        )
}

/// Comment routes
///
/// `:id` is an image id for GET and POST, and a comment id for PATCH and DELETE.
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments", post(comments::create_comment))
        .route(
            "/comments/:id",
            get(comments::list_comments)
                .post(comments::create_comment_for_image)
                .patch(comments::update_comment)
                .delete(comments::delete_comment),
        )
}
