//! Service context - dependency container for services
//!
//! Holds the repositories, the image provider, and the listing limits.
//! Built once at startup and shared by every request.

use std::sync::Arc;

use gallery_common::ImagesConfig;
use gallery_core::traits::{CommentRepository, HealthCheck, ImageProvider, LikeRepository};
use gallery_core::DomainError;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    comment_repo: Arc<dyn CommentRepository>,
    like_repo: Arc<dyn LikeRepository>,

    // External
    image_provider: Arc<dyn ImageProvider>,
    health_check: Arc<dyn HealthCheck>,

    images: ImagesConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        like_repo: Arc<dyn LikeRepository>,
        image_provider: Arc<dyn ImageProvider>,
        health_check: Arc<dyn HealthCheck>,
        images: ImagesConfig,
    ) -> Self {
        Self {
            comment_repo,
            like_repo,
            image_provider,
            health_check,
            images,
        }
    }

    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    // === External ===

    /// Get the third-party image provider
    pub fn image_provider(&self) -> &dyn ImageProvider {
        self.image_provider.as_ref()
    }

    /// Get the store connectivity probe
    pub fn health_check(&self) -> &dyn HealthCheck {
        self.health_check.as_ref()
    }

    // === Settings ===

    /// Page-size defaults and bounds for image listings
    pub fn images_config(&self) -> &ImagesConfig {
        &self.images
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("image_provider", &"...")
            .field("images", &self.images)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    comment_repo: Option<Arc<dyn CommentRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
    image_provider: Option<Arc<dyn ImageProvider>>,
    health_check: Option<Arc<dyn HealthCheck>>,
    images: Option<ImagesConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    pub fn image_provider(mut self, provider: Arc<dyn ImageProvider>) -> Self {
        self.image_provider = Some(provider);
        self
    }

    pub fn health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_check = Some(check);
        self
    }

    /// Listing limits; defaults to 12 per page, at most 30
    pub fn images_config(mut self, images: ImagesConfig) -> Self {
        self.images = Some(images);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Failure` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.comment_repo.ok_or_else(|| missing("comment_repo"))?,
            self.like_repo.ok_or_else(|| missing("like_repo"))?,
            self.image_provider.ok_or_else(|| missing("image_provider"))?,
            self.health_check.ok_or_else(|| missing("health_check"))?,
            self.images.unwrap_or_default(),
        ))
    }
}

fn missing(dependency: &str) -> ServiceError {
    ServiceError::failure(
        "Service context is incomplete.",
        DomainError::InternalError(format!("{dependency} is required")),
    )
}
