//! Comment handlers

use axum::{extract::State, Json};
use gallery_service::{
    CommentResponse, CommentService, CommentUpdatedResponse, CreateCommentRequest,
    MessageResponse, UpdateCommentRequest,
};

use crate::extractors::{PathParam, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List an image's comments, newest first
///
/// GET /api/comments/:image_id
pub async fn list_comments(
    State(state): State<AppState>,
    PathParam(image_id): PathParam<String>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comments = service.list_comments(&image_id).await?;
    Ok(Json(comments))
}

/// Post a comment on the image named in the path
///
/// POST /api/comments/:image_id
pub async fn create_comment_for_image(
    State(state): State<AppState>,
    PathParam(image_id): PathParam<String>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comment = service.create_comment(Some(&image_id), request).await?;
    Ok(Created(Json(comment)))
}

/// Post a comment with the image id in the body
///
/// POST /api/comments
pub async fn create_comment(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comment = service.create_comment(None, request).await?;
    Ok(Created(Json(comment)))
}

/// Edit a comment's content
///
/// PATCH /api/comments/:comment_id
pub async fn update_comment(
    State(state): State<AppState>,
    PathParam(comment_id): PathParam<String>,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentUpdatedResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service.update_comment(&comment_id, request).await?;
    Ok(Json(response))
}

/// Delete a comment
///
/// DELETE /api/comments/:comment_id
pub async fn delete_comment(
    State(state): State<AppState>,
    PathParam(comment_id): PathParam<String>,
) -> ApiResult<Json<MessageResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service.delete_comment(&comment_id).await?;
    Ok(Json(response))
}
