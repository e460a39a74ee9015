//! ImageLike entity - aggregate like counter for one image

/// Like counter row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLike {
    pub image_id: String,
    /// Never negative; starts at 1 when the row is created
    pub likes: i64,
}

impl ImageLike {
    /// Create a counter value
    pub fn new(image_id: impl Into<String>, likes: i64) -> Self {
        Self {
            image_id: image_id.into(),
            likes,
        }
    }
}
