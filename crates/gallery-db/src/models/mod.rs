//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod like;

pub use comment::CommentModel;
pub use like::ImageLikeModel;
