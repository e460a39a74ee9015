//! Entity to DTO mappers

use std::collections::HashMap;

use gallery_core::entities::{Comment, ProviderImage, ProviderPage};

use super::responses::{
    CommentResponse, ImageResponse, ImageUrlsResponse, ImageUserResponse, ImagesResponse,
};

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            image_id: comment.image_id.clone(),
            content: comment.content.clone(),
            user_name: comment.user_name.clone(),
            avatar_url: comment.avatar_url.clone(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            edited: comment.is_edited(),
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

// ============================================================================
// Image Aggregation
// ============================================================================

impl ImageResponse {
    /// Merge a provider image with the local counter, which wins when present
    pub fn aggregate(image: ProviderImage, local_likes: Option<i64>) -> Self {
        Self {
            likes: local_likes.unwrap_or(image.likes),
            liked: false,
            id: image.id,
            urls: ImageUrlsResponse {
                thumb: image.urls.thumb,
                small: image.urls.small,
                regular: image.urls.regular,
                full: image.urls.full,
            },
            alt_description: image.alt_description,
            description: image.description,
            user: ImageUserResponse {
                name: image.user_name,
            },
            tags: image.tags,
        }
    }
}

impl ImagesResponse {
    /// Build the listing response for `page`, overriding provider likes with
    /// the counters found in `counts`
    pub fn aggregate(provider_page: ProviderPage, counts: &HashMap<String, i64>, page: u32) -> Self {
        Self {
            total: provider_page.total,
            total_pages: provider_page.total_pages.max(1),
            page,
            images: provider_page
                .images
                .into_iter()
                .map(|image| {
                    let local = counts.get(&image.id).copied();
                    ImageResponse::aggregate(image, local)
                })
                .collect(),
        }
    }
}
