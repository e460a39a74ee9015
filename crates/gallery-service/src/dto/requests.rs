//! Request DTOs for API endpoints
//!
//! Comment bodies implement `Deserialize` and `Validate`. The `max = 2000`
//! ceiling mirrors `gallery_core::MAX_COMMENT_LENGTH`. The length floor is
//! measured after trimming, which `validator` cannot express, so the services
//! apply it through `gallery_core::validate_comment_content`.

use gallery_common::ImagesConfig;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
///
/// The image id may come from the path instead of the body.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[serde(default)]
    #[validate(length(max = 2000, message = "Comment too long."))]
    pub content: String,

    #[serde(default)]
    pub user_name: Option<String>,

    #[serde(default)]
    pub avatar_url: Option<String>,

    #[serde(default, rename = "imageId", alias = "image_id")]
    pub image_id: Option<String>,
}

/// Edit comment request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[serde(default)]
    #[validate(length(max = 2000, message = "Comment too long."))]
    pub content: String,
}

// ============================================================================
// Image Queries
// ============================================================================

/// Image listing query as received
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageQuery {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Image listing query with defaults applied and bounds enforced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedImageQuery {
    /// Trimmed, non-empty search term
    pub search: Option<String>,
    /// At least 1
    pub page: u32,
    /// Within `1..=max_per_page`
    pub per_page: u32,
}

impl ImageQuery {
    /// Apply defaults and clamp to the configured page-size bounds
    pub fn normalize(&self, config: &ImagesConfig) -> NormalizedImageQuery {
        let max = config.max_per_page.max(1);

        NormalizedImageQuery {
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|term| !term.is_empty())
                .map(String::from),
            page: self.page.unwrap_or(1).max(1),
            per_page: self
                .per_page
                .unwrap_or(config.default_per_page)
                .clamp(1, max),
        }
    }
}
