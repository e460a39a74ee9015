//! Domain entities - core business objects

mod comment;
mod image;
mod like;

pub use comment::{
    validate_comment_content, Comment, CommentId, NewComment, DEFAULT_USER_NAME,
    MAX_COMMENT_LENGTH, MIN_COMMENT_LENGTH,
};
pub use image::{total_pages, ImageUrls, ProviderImage, ProviderPage};
pub use like::ImageLike;
