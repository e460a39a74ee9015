//! Comment entity <-> model mapper

use gallery_core::entities::{Comment, NewComment};

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            image_id: model.image_id,
            content: model.content,
            user_name: model.user_name,
            avatar_url: model.avatar_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Column values for inserting a new comment
pub struct CommentInsert<'a> {
    pub image_id: &'a str,
    pub content: &'a str,
    pub user_name: &'a str,
    pub avatar_url: Option<&'a str>,
}

impl<'a> CommentInsert<'a> {
    pub fn new(comment: &'a NewComment) -> Self {
        Self {
            image_id: &comment.image_id,
            content: &comment.content,
            user_name: &comment.user_name,
            avatar_url: comment.avatar_url.as_deref(),
        }
    }
}
