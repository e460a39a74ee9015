//! Wire formats of the Unsplash photo endpoints
//!
//! Only the fields the gallery renders are kept. Everything else in the
//! provider payload is ignored, and missing fields fall back to defaults.

use gallery_core::entities::{ImageUrls, ProviderImage};
use serde::Deserialize;

/// A photo as returned by `GET /photos` and inside `GET /search/photos`
#[derive(Debug, Clone, Deserialize)]
pub struct UnsplashPhoto {
    pub id: String,
    #[serde(default)]
    pub alt_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub urls: UnsplashUrls,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub user: UnsplashUser,
    #[serde(default)]
    pub tags: Vec<UnsplashTag>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnsplashUrls {
    #[serde(default)]
    pub thumb: String,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub regular: Option<String>,
    #[serde(default)]
    pub full: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnsplashUser {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnsplashTag {
    #[serde(default)]
    pub title: Option<String>,
}

/// Body of `GET /search/photos`
#[derive(Debug, Clone, Deserialize)]
pub struct UnsplashSearchResponse {
    #[serde(default)]
    pub results: Vec<UnsplashPhoto>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
}

impl From<UnsplashPhoto> for ProviderImage {
    fn from(photo: UnsplashPhoto) -> Self {
        ProviderImage {
            id: photo.id,
            alt_description: photo.alt_description,
            description: photo.description,
            urls: ImageUrls {
                thumb: photo.urls.thumb,
                small: photo.urls.small,
                regular: photo.urls.regular,
                full: photo.urls.full,
            },
            user_name: photo.user.name,
            likes: photo.likes.max(0),
            tags: photo
                .tags
                .into_iter()
                .filter_map(|tag| tag.title)
                .filter(|title| !title.trim().is_empty())
                .collect(),
        }
    }
}
