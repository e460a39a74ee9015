//! # gallery-service
//!
//! Application layer containing the image aggregation, comment and like
//! use cases, their DTOs, and the service error type.

pub mod dto;
pub mod services;

pub use dto::{
    CommentResponse, CommentUpdatedResponse, CreateCommentRequest, HealthChecks, HealthResponse,
    ImageQuery, ImageResponse, ImageUrlsResponse, ImageUserResponse, ImagesResponse, LikeResponse,
    MessageResponse, NormalizedImageQuery, ReadinessResponse, UpdateCommentRequest,
};
pub use services::{
    CommentService, ImageService, LikeService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
