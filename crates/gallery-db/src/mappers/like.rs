//! ImageLike entity <-> model mapper

use gallery_core::entities::ImageLike;

use crate::models::ImageLikeModel;

impl From<ImageLikeModel> for ImageLike {
    fn from(model: ImageLikeModel) -> Self {
        ImageLike::new(model.image_id, model.likes)
    }
}
