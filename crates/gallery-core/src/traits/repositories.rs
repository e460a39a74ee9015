//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::entities::{Comment, CommentId, NewComment};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// List all comments on an image, newest first
    async fn find_by_image(&self, image_id: &str) -> RepoResult<Vec<Comment>>;

    /// Insert a comment and return the stored row
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment>;

    /// Replace the content and refresh `updated_at`.
    ///
    /// Returns `None` when no row has the given id.
    async fn update_content(&self, id: CommentId, content: &str) -> RepoResult<Option<Comment>>;

    /// Physically delete a comment. Returns `false` when no row matched.
    async fn delete(&self, id: CommentId) -> RepoResult<bool>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Atomically create the counter with 1 or add 1 to it, returning the
    /// new value. Must not lose updates under concurrent calls.
    async fn increment(&self, image_id: &str) -> RepoResult<i64>;

    /// Batch lookup of counters. Ids without a row are absent from the map.
    async fn find_counts(&self, image_ids: &[String]) -> RepoResult<HashMap<String, i64>>;
}

// ============================================================================
// Health
// ============================================================================

/// Connectivity probe for the backing store
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn ping(&self) -> RepoResult<()>;
}
