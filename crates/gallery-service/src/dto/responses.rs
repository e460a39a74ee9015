//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Field names follow the wire format the gallery frontend reads, which mixes
//! camelCase (`totalPages`, `imageId`) with snake_case comment columns.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Image Responses
// ============================================================================

/// One page of aggregated images
#[derive(Debug, Clone, Serialize)]
pub struct ImagesResponse {
    pub images: Vec<ImageResponse>,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    pub page: u32,
}

/// Provider image merged with the local like counter
#[derive(Debug, Clone, Serialize)]
pub struct ImageResponse {
    pub id: String,
    pub urls: ImageUrlsResponse,
    pub alt_description: Option<String>,
    pub description: Option<String>,
    pub user: ImageUserResponse,
    pub tags: Vec<String>,
    pub likes: i64,
    /// Always false here; clients rebuild it from their own liked set
    pub liked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUrlsResponse {
    pub thumb: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular: Option<String>,
    pub full: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUserResponse {
    pub name: String,
}

// ============================================================================
// Like Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LikeResponse {
    #[serde(rename = "imageId")]
    pub image_id: String,
    pub likes: i64,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Stored comment
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub image_id: String,
    pub content: String,
    pub user_name: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub edited: bool,
}

/// Result of a successful edit
#[derive(Debug, Clone, Serialize)]
pub struct CommentUpdatedResponse {
    pub message: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

/// Plain confirmation message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
