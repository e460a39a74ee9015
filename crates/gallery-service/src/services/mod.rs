//! Business logic services
//!
//! Each service borrows the shared `ServiceContext` for the duration of a
//! request and performs one use case against the repositories and provider.

pub mod comment;
pub mod context;
pub mod error;
pub mod image;
pub mod like;

#[cfg(test)]
pub(crate) mod testing;

pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use image::ImageService;
pub use like::LikeService;
