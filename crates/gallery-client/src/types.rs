//! Wire types for the gallery REST API, as seen by the client

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author shown for comments posted without a name
pub const GUEST_NAME: &str = "Guest";

/// Image URLs in the sizes the server forwards
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrls {
    #[serde(default)]
    pub thumb: String,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub regular: Option<String>,
    #[serde(default)]
    pub full: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUser {
    #[serde(default)]
    pub name: String,
}

/// One gallery image
///
/// `liked` always arrives as `false`; the gallery fills it in from the
/// local liked set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    #[serde(default)]
    pub urls: ImageUrls,
    #[serde(default)]
    pub alt_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub user: ImageUser,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub liked: bool,
}

/// `GET /api/images` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImagePage {
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub total: u64,
    #[serde(default, rename = "totalPages")]
    pub total_pages: u32,
    #[serde(default)]
    pub page: u32,
}

/// Image listing parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
}

/// `POST /api/images/:id/like` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LikeResult {
    #[serde(rename = "imageId")]
    pub image_id: String,
    pub likes: i64,
}

/// Comment as returned by the server
#[derive(Debug, Clone, Deserialize)]
pub struct RawComment {
    pub id: i64,
    #[serde(default)]
    pub image_id: String,
    pub content: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Comment as displayed: string id and a non-empty author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<RawComment> for Comment {
    fn from(raw: RawComment) -> Self {
        let author = raw
            .user_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| GUEST_NAME.to_string());

        Self {
            id: raw.id.to_string(),
            content: raw.content,
            author,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        }
    }
}

/// Body for posting a comment
#[derive(Debug, Clone, Serialize)]
pub struct NewCommentBody {
    pub content: String,
    pub user_name: String,
    pub avatar_url: String,
}

impl NewCommentBody {
    /// A guest comment with no avatar
    pub fn guest(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            user_name: GUEST_NAME.to_string(),
            avatar_url: String::new(),
        }
    }
}

/// `PATCH /api/comments/:id` response
#[derive(Debug, Clone, Deserialize)]
pub struct CommentUpdate {
    pub message: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

/// Plain `{ message }` response
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message: String,
}
