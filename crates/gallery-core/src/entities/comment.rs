//! Comment entity - a remark left on an image

use chrono::{DateTime, Utc};

use crate::error::DomainError;

/// Store-assigned comment identifier
pub type CommentId = i64;

/// Minimum number of characters (after trimming) a comment must contain
pub const MIN_COMMENT_LENGTH: usize = 3;

/// Maximum number of characters a comment may contain
pub const MAX_COMMENT_LENGTH: usize = 2000;

/// Display name used when the author did not provide one
pub const DEFAULT_USER_NAME: &str = "Anonymous";

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    /// Provider image id; not enforced as a foreign key
    pub image_id: String,
    pub content: String,
    pub user_name: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Check if the comment was edited after creation
    #[inline]
    pub fn is_edited(&self) -> bool {
        self.updated_at > self.created_at
    }
}

/// A comment that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub image_id: String,
    pub content: String,
    pub user_name: String,
    pub avatar_url: Option<String>,
}

impl NewComment {
    /// Build a new comment, validating the content and normalizing the
    /// optional author fields.
    pub fn new(
        image_id: impl Into<String>,
        content: impl Into<String>,
        user_name: Option<String>,
        avatar_url: Option<String>,
    ) -> Result<Self, DomainError> {
        let image_id = image_id.into().trim().to_string();
        if image_id.is_empty() {
            return Err(DomainError::MissingImageId);
        }

        let content = content.into();
        validate_comment_content(&content)?;

        let user_name = user_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_USER_NAME.to_string());

        let avatar_url = avatar_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Ok(Self {
            image_id,
            content,
            user_name,
            avatar_url,
        })
    }
}

/// Check the comment length rules.
///
/// The lower bound counts characters after trimming surrounding whitespace,
/// so `"  a  "` is too short.
pub fn validate_comment_content(content: &str) -> Result<(), DomainError> {
    if content.trim().chars().count() < MIN_COMMENT_LENGTH {
        return Err(DomainError::ContentTooShort {
            min: MIN_COMMENT_LENGTH,
        });
    }
    if content.chars().count() > MAX_COMMENT_LENGTH {
        return Err(DomainError::ContentTooLong {
            max: MAX_COMMENT_LENGTH,
        });
    }
    Ok(())
}
