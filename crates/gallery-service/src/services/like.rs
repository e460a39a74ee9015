//! Like service

use tracing::{info, instrument};

use gallery_core::DomainError;

use crate::dto::LikeResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Like service
pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    /// Create a new LikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add one like to the image's counter, creating it at 1 on first use
    #[instrument(skip(self))]
    pub async fn like_image(&self, image_id: &str) -> ServiceResult<LikeResponse> {
        let image_id = image_id.trim();
        if image_id.is_empty() {
            return Err(ServiceError::rule(
                &DomainError::MissingImageId,
                "Image id is required.",
            ));
        }

        let likes = self
            .ctx
            .like_repo()
            .increment(image_id)
            .await
            .map_err(|e| ServiceError::failure("Failed to like image.", e))?;

        info!(image_id, likes, "Image liked");

        Ok(LikeResponse {
            image_id: image_id.to_string(),
            likes,
        })
    }
}
