//! # gallery-client
//!
//! Frontend state for the gallery: a paginated image grid with optimistic
//! likes remembered in local storage, and a comment panel for the open image.
//! Both talk to the gallery REST API through [`GalleryApi`].

pub mod api;
pub mod comments;
pub mod error;
pub mod gallery;
pub mod storage;
pub mod types;

pub use api::GalleryApi;
pub use comments::{CommentPanel, PanelStatus};
pub use error::{ClientError, ClientResult};
pub use gallery::{Gallery, GalleryStatus, DEFAULT_PER_PAGE};
pub use storage::{FileLikedStore, LikedStore, MemoryLikedStore, LIKED_IMAGES_KEY};
pub use types::{
    Comment, CommentUpdate, Image, ImagePage, ImageQuery, ImageUrls, ImageUser, LikeResult,
    Message, NewCommentBody, RawComment,
};
