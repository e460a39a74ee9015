//! # gallery-core
//!
//! Domain layer containing entities, comment validation rules, and the
//! repository and image-provider traits.
//! This crate has zero dependencies on infrastructure (database, web framework, HTTP client).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    total_pages, validate_comment_content, Comment, CommentId, ImageLike, ImageUrls, NewComment,
    ProviderImage, ProviderPage, DEFAULT_USER_NAME, MAX_COMMENT_LENGTH, MIN_COMMENT_LENGTH,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, HealthCheck, ImageProvider, LikeRepository, ProviderResult, RepoResult,
};
