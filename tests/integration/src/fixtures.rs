//! Test fixtures and data generators
//!
//! Response shapes as seen by an HTTP client, plus mocked provider payloads.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Image id that no other test (or earlier run) uses
pub fn unique_image_id(prefix: &str) -> String {
    format!("{prefix}-{}-{}", std::process::id(), unique_suffix())
}

/// Create comment request
#[derive(Debug, Default, Serialize)]
pub struct CreateComment {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(rename = "imageId", skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
}

impl CreateComment {
    pub fn content(content: &str) -> Self {
        Self {
            content: content.to_string(),
            ..Default::default()
        }
    }

    pub fn for_image(image_id: &str, content: &str) -> Self {
        Self {
            image_id: Some(image_id.to_string()),
            ..Self::content(content)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ImagesBody {
    pub images: Vec<ImageBody>,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    pub page: u32,
}

#[derive(Debug, Deserialize)]
pub struct ImageBody {
    pub id: String,
    pub likes: i64,
    pub liked: bool,
    pub tags: Vec<String>,
    pub alt_description: Option<String>,
    pub user: ImageUserBody,
}

#[derive(Debug, Deserialize)]
pub struct ImageUserBody {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LikeBody {
    #[serde(rename = "imageId")]
    pub image_id: String,
    pub likes: i64,
}

#[derive(Debug, Deserialize)]
pub struct CommentBody {
    pub id: i64,
    pub image_id: String,
    pub content: String,
    pub user_name: String,
    pub avatar_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub edited: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdatedBody {
    pub message: String,
    pub content: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// One provider photo
pub fn photo_json(id: &str, likes: i64) -> serde_json::Value {
    json!({
        "id": id,
        "alt_description": format!("Photo {id}"),
        "urls": {
            "thumb": format!("https://images.mock/{id}/thumb"),
            "small": format!("https://images.mock/{id}/small"),
            "full": format!("https://images.mock/{id}/full")
        },
        "user": { "name": "Mock User" },
        "tags": [{ "title": "nature" }, { "title": "" }],
        "likes": likes
    })
}

/// Serve `photos` from the provider listing endpoint
pub async fn mount_listing(provider: &MockServer, photos: &[(&str, i64)], total: u64) {
    let body: Vec<_> = photos.iter().map(|(id, likes)| photo_json(id, *likes)).collect();
    Mock::given(method("GET"))
        .and(path("/photos"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Total", total.to_string().as_str())
                .set_body_json(body),
        )
        .mount(provider)
        .await;
}

/// Serve `photos` from the provider search endpoint for `query`
pub async fn mount_search(provider: &MockServer, query: &str, photos: &[(&str, i64)], total: u64) {
    let results: Vec<_> = photos.iter().map(|(id, likes)| photo_json(id, *likes)).collect();
    let total_pages = total.div_ceil(12);
    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .and(query_param("query", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": results,
            "total": total,
            "total_pages": total_pages
        })))
        .mount(provider)
        .await;
}
