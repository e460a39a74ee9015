//! Like counter database model

use sqlx::FromRow;

/// Database model for the image_likes table
#[derive(Debug, Clone, FromRow)]
pub struct ImageLikeModel {
    pub image_id: String,
    pub likes: i64,
}
