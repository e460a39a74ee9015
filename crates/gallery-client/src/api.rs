//! HTTP client for the gallery REST API

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClientError, ClientResult};
use crate::types::{
    Comment, CommentUpdate, ImagePage, ImageQuery, LikeResult, Message, NewCommentBody, RawComment,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body produced by the server
#[derive(Deserialize)]
struct ApiErrorResponse {
    code: String,
    message: String,
    #[serde(default)]
    details: Option<serde_json::Value>,
}

#[derive(Serialize)]
struct ContentBody<'a> {
    content: &'a str,
}

/// Gallery API client
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct GalleryApi {
    client: Client,
    base_url: Url,
}

impl GalleryApi {
    /// Create a client for the server at `base_url` (e.g. `http://localhost:3001`)
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Get base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `<base>/api/<segments...>`, each segment percent-encoded
    fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&text) {
                return Err(ClientError::Api {
                    status: status.as_u16(),
                    code: api_err.code,
                    message: api_err.message,
                    details: api_err.details,
                });
            }
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch one page of images
    pub async fn list_images(&self, query: &ImageQuery) -> ClientResult<ImagePage> {
        debug!(page = query.page, search = %query.search, "Fetching images");
        let response = self
            .client
            .get(self.url(&["images"])?)
            .query(&[
                ("page", query.page.to_string()),
                ("limit", query.per_page.to_string()),
                ("search", query.search.clone()),
            ])
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Register one like for an image
    pub async fn like_image(&self, image_id: &str) -> ClientResult<LikeResult> {
        let response = self
            .client
            .post(self.url(&["images", image_id, "like"])?)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Comments on an image, newest first
    pub async fn list_comments(&self, image_id: &str) -> ClientResult<Vec<Comment>> {
        let response = self
            .client
            .get(self.url(&["comments", image_id])?)
            .send()
            .await?;
        let raw: Vec<RawComment> = Self::handle_response(response).await?;
        Ok(raw.into_iter().map(Comment::from).collect())
    }

    /// Post a comment on an image
    pub async fn post_comment(&self, image_id: &str, body: &NewCommentBody) -> ClientResult<Comment> {
        let response = self
            .client
            .post(self.url(&["comments", image_id])?)
            .json(body)
            .send()
            .await?;
        let raw: RawComment = Self::handle_response(response).await?;
        Ok(Comment::from(raw))
    }

    /// Replace a comment's content
    pub async fn update_comment(&self, comment_id: &str, content: &str) -> ClientResult<CommentUpdate> {
        let response = self
            .client
            .patch(self.url(&["comments", comment_id])?)
            .json(&ContentBody { content })
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Delete a comment
    pub async fn delete_comment(&self, comment_id: &str) -> ClientResult<Message> {
        let response = self
            .client
            .delete(self.url(&["comments", comment_id])?)
            .send()
            .await?;
        Self::handle_response(response).await
    }
}
