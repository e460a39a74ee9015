//! Comment service
//!
//! Handles listing, posting, editing and deleting comments on images.
//! Every operation is a single store statement.

use tracing::{info, instrument};

use gallery_core::entities::{CommentId, NewComment};
use gallery_core::{validate_comment_content, DomainError};

use crate::dto::{
    CommentResponse, CommentUpdatedResponse, CreateCommentRequest, MessageResponse,
    UpdateCommentRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const RESOURCE: &str = "Comment";

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All comments on an image, newest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, image_id: &str) -> ServiceResult<Vec<CommentResponse>> {
        let comments = self
            .ctx
            .comment_repo()
            .find_by_image(image_id.trim())
            .await
            .map_err(|e| ServiceError::failure("Failed to load comments.", e))?;

        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Post a comment. A non-blank `path_image_id` takes precedence over the
    /// body's `imageId`.
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        path_image_id: Option<&str>,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let image_id = path_image_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(String::from)
            .or(request.image_id)
            .unwrap_or_default();

        let new = NewComment::new(image_id, request.content, request.user_name, request.avatar_url)
            .map_err(|e| content_rule(&e, "Comment too short."))?;

        let comment = self
            .ctx
            .comment_repo()
            .create(&new)
            .await
            .map_err(|e| ServiceError::failure("Failed to post comment.", e))?;

        info!(comment_id = comment.id, image_id = %comment.image_id, "Comment created");

        Ok(CommentResponse::from(comment))
    }

    /// Replace a comment's content. Content is validated before the lookup.
    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        comment_id: &str,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentUpdatedResponse> {
        validate_comment_content(&request.content)
            .map_err(|e| content_rule(&e, "Content too short to update."))?;

        let id = parse_comment_id(comment_id)?;

        let comment = self
            .ctx
            .comment_repo()
            .update_content(id, &request.content)
            .await
            .map_err(|e| ServiceError::failure("Failed to update comment.", e))?
            .ok_or_else(|| ServiceError::not_found(RESOURCE, comment_id))?;

        info!(comment_id = id, "Comment updated");

        Ok(CommentUpdatedResponse {
            message: "Comment updated.".to_string(),
            content: comment.content,
            updated_at: comment.updated_at,
        })
    }

    /// Physically delete a comment
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, comment_id: &str) -> ServiceResult<MessageResponse> {
        let id = parse_comment_id(comment_id)?;

        let deleted = self
            .ctx
            .comment_repo()
            .delete(id)
            .await
            .map_err(|e| ServiceError::failure("Failed to delete comment.", e))?;

        if !deleted {
            return Err(ServiceError::not_found(RESOURCE, comment_id));
        }

        info!(comment_id = id, "Comment deleted");

        Ok(MessageResponse::new("Comment deleted."))
    }
}

/// Ids are store-assigned integers, so anything else cannot exist
fn parse_comment_id(raw: &str) -> ServiceResult<CommentId> {
    raw.trim()
        .parse()
        .map_err(|_| ServiceError::not_found(RESOURCE, raw))
}

/// Map a rejected comment to its client-facing message
fn content_rule(err: &DomainError, too_short: &str) -> ServiceError {
    match err {
        DomainError::ContentTooShort { .. } => ServiceError::rule(err, too_short),
        DomainError::ContentTooLong { .. } => ServiceError::rule(err, "Comment too long."),
        DomainError::MissingImageId => ServiceError::rule(err, "Image id is required."),
        other => ServiceError::rule(other, other.to_string()),
    }
}
