//! HTTP client for the Unsplash photo endpoints

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use gallery_common::ProviderConfig;
use gallery_core::entities::{ProviderImage, ProviderPage};
use gallery_core::traits::{ImageProvider, ProviderResult};

use crate::error::ProviderClientError;

use super::models::{UnsplashPhoto, UnsplashSearchResponse};

/// Header carrying the total item count of the `/photos` listing
const TOTAL_HEADER: &str = "x-total";

/// Unsplash API client
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    client: Client,
    base_url: String,
}

impl UnsplashClient {
    /// Create a client for `base_url`.
    ///
    /// Requests carry `Authorization: Client-ID <access_key>` when a key is
    /// given, and always pin `Accept-Version: v1`.
    pub fn new(
        base_url: &str,
        access_key: &str,
        timeout: Duration,
    ) -> Result<Self, ProviderClientError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ProviderClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert("Accept-Version", HeaderValue::from_static("v1"));
        let access_key = access_key.trim();
        if !access_key.is_empty() {
            let value = HeaderValue::from_str(&format!("Client-ID {access_key}"))
                .map_err(|_| ProviderClientError::InvalidAccessKey)?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Create a client from the application's provider settings
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderClientError> {
        Self::new(&config.api_url, &config.access_key, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Response, ProviderClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ProviderClientError> {
        Ok(response.json().await?)
    }
}

/// Parse the `X-Total` header, if present and numeric
fn total_from_headers(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(TOTAL_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

fn into_images(photos: Vec<UnsplashPhoto>) -> Vec<ProviderImage> {
    photos.into_iter().map(ProviderImage::from).collect()
}

#[async_trait]
impl ImageProvider for UnsplashClient {
    #[instrument(skip(self))]
    async fn list(&self, page: u32, per_page: u32) -> ProviderResult<ProviderPage> {
        let response = self
            .get(
                "/photos",
                &[("page", page.to_string()), ("per_page", per_page.to_string())],
            )
            .await?;

        let total = total_from_headers(response.headers());
        let photos: Vec<UnsplashPhoto> = Self::decode(response).await?;
        let total = total.unwrap_or(photos.len() as u64);

        debug!(count = photos.len(), total, "Fetched provider listing");
        Ok(ProviderPage::from_total(into_images(photos), total, per_page))
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str, page: u32, per_page: u32) -> ProviderResult<ProviderPage> {
        let response = self
            .get(
                "/search/photos",
                &[
                    ("query", query.to_string()),
                    ("page", page.to_string()),
                    ("per_page", per_page.to_string()),
                ],
            )
            .await?;

        let body: UnsplashSearchResponse = Self::decode(response).await?;

        debug!(count = body.results.len(), total = body.total, "Fetched provider search");
        Ok(ProviderPage {
            images: into_images(body.results),
            total: body.total,
            total_pages: body.total_pages.max(1),
        })
    }
}
