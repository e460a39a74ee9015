//! Custom extractors for Axum handlers
//!
//! Rejections are mapped to `ApiError` so every failure shares one body shape.

mod images;
mod path;
mod validated;

pub use images::{ImageListQuery, ImageQueryParams};
pub use path::PathParam;
pub use validated::ValidatedJson;
