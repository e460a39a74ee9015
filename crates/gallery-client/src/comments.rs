//! Comment panel for the open image

use gallery_core::MIN_COMMENT_LENGTH;
use tracing::warn;

use crate::api::GalleryApi;
use crate::types::{Comment, NewCommentBody};

const TOO_SHORT: &str = "Comment must be at least 3 characters.";
const LOAD_FAILED: &str = "Failed to load comments.";
const POST_FAILED: &str = "Failed to post comment.";
const UPDATE_FAILED: &str = "Failed to update comment.";
const DELETE_FAILED: &str = "Failed to delete comment.";

/// Panel status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStatus {
    Loading,
    Loaded,
    Error,
    Submitting,
}

/// Comments on one image plus the draft being written
#[derive(Debug)]
pub struct CommentPanel {
    api: GalleryApi,
    image_id: String,
    comments: Vec<Comment>,
    status: PanelStatus,
    error: Option<String>,
    draft: String,
}

/// Trimmed text when long enough to post
fn accepted(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (trimmed.chars().count() >= MIN_COMMENT_LENGTH).then_some(trimmed)
}

impl CommentPanel {
    /// Open the panel and load the image's comments
    pub async fn open(api: GalleryApi, image_id: impl Into<String>) -> Self {
        let mut panel = Self {
            api,
            image_id: image_id.into(),
            comments: Vec::new(),
            status: PanelStatus::Loading,
            error: None,
            draft: String::new(),
        };
        panel.reload().await;
        panel
    }

    pub fn image_id(&self) -> &str {
        &self.image_id
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn status(&self) -> PanelStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Fetch the comment list again
    pub async fn reload(&mut self) {
        self.status = PanelStatus::Loading;
        match self.api.list_comments(&self.image_id).await {
            Ok(comments) => {
                self.comments = comments;
                self.error = None;
                self.status = PanelStatus::Loaded;
            }
            Err(e) => {
                warn!(error = %e, image_id = %self.image_id, "Error fetching comments");
                self.fail(LOAD_FAILED);
            }
        }
    }

    /// Post the draft as a guest; returns whether it was posted
    ///
    /// Short drafts are rejected locally without a request.
    pub async fn submit(&mut self) -> bool {
        let Some(content) = accepted(&self.draft).map(str::to_string) else {
            self.error = Some(TOO_SHORT.to_string());
            return false;
        };

        self.status = PanelStatus::Submitting;
        match self
            .api
            .post_comment(&self.image_id, &NewCommentBody::guest(content))
            .await
        {
            Ok(comment) => {
                self.comments.insert(0, comment);
                self.draft.clear();
                self.error = None;
                self.status = PanelStatus::Loaded;
                true
            }
            Err(e) => {
                warn!(error = %e, image_id = %self.image_id, "Error posting comment");
                self.fail(POST_FAILED);
                false
            }
        }
    }

    /// Replace a comment's content
    pub async fn edit(&mut self, comment_id: &str, content: &str) -> bool {
        let Some(content) = accepted(content) else {
            self.error = Some(TOO_SHORT.to_string());
            return false;
        };

        match self.api.update_comment(comment_id, content).await {
            Ok(update) => {
                if let Some(comment) = self.comments.iter_mut().find(|c| c.id == comment_id) {
                    comment.content = update.content;
                    comment.updated_at = Some(update.updated_at);
                }
                self.error = None;
                self.status = PanelStatus::Loaded;
                true
            }
            Err(e) => {
                warn!(error = %e, comment_id, "Error updating comment");
                self.fail(UPDATE_FAILED);
                false
            }
        }
    }

    /// Delete a comment
    pub async fn remove(&mut self, comment_id: &str) -> bool {
        match self.api.delete_comment(comment_id).await {
            Ok(_) => {
                self.comments.retain(|c| c.id != comment_id);
                self.error = None;
                self.status = PanelStatus::Loaded;
                true
            }
            Err(e) => {
                warn!(error = %e, comment_id, "Error deleting comment");
                self.fail(DELETE_FAILED);
                false
            }
        }
    }

    fn fail(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.status = PanelStatus::Error;
    }
}
