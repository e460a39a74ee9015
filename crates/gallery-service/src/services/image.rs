//! Image service
//!
//! Lists provider images and merges in the local like counters.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::dto::{ImageQuery, ImagesResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const FETCH_FAILED: &str = "Failed to fetch images.";

/// Image service
pub struct ImageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ImageService<'a> {
    /// Create a new ImageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch one page from the provider (search when a term is given) and
    /// override each image's likes with the local counter when one exists.
    #[instrument(skip(self))]
    pub async fn list_images(&self, query: ImageQuery) -> ServiceResult<ImagesResponse> {
        let query = query.normalize(self.ctx.images_config());
        let provider = self.ctx.image_provider();

        let page = match query.search.as_deref() {
            Some(term) => provider.search(term, query.page, query.per_page).await,
            None => provider.list(query.page, query.per_page).await,
        }
        .map_err(|e| ServiceError::failure(FETCH_FAILED, e))?;

        let counts = if page.is_empty() {
            HashMap::new()
        } else {
            self.ctx
                .like_repo()
                .find_counts(&page.ids())
                .await
                .map_err(|e| ServiceError::failure(FETCH_FAILED, e))?
        };

        debug!(
            count = page.images.len(),
            overridden = counts.len(),
            "Aggregated image page"
        );

        Ok(ImagesResponse::aggregate(page, &counts, query.page))
    }
}
