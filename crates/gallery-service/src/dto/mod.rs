//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers from domain entities to response DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreateCommentRequest, ImageQuery, NormalizedImageQuery, UpdateCommentRequest};

pub use responses::{
    CommentResponse, CommentUpdatedResponse, HealthChecks, HealthResponse, ImageResponse,
    ImageUrlsResponse, ImageUserResponse, ImagesResponse, LikeResponse, MessageResponse,
    ReadinessResponse,
};
