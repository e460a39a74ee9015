//! Image listing query extractor
//!
//! Accepts `q` or `search` for the term and `perPage`, `per_page` or `limit`
//! for the page size. When several are sent, the first non-blank one in that
//! order wins. Blank values count as absent; anything else must be a
//! non-negative integer.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use gallery_service::ImageQuery;
use serde::Deserialize;

use crate::response::ApiError;

/// Raw image listing query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ImageQueryParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default, rename = "perPage")]
    pub per_page: Option<String>,
    #[serde(default, rename = "per_page")]
    pub per_page_snake: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

/// Parsed image listing query; defaults and clamping happen in the service
#[derive(Debug, Clone)]
pub struct ImageListQuery(pub ImageQuery);

/// First value that is present and not blank
fn first_filled(candidates: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

fn parse_number(raw: Option<String>, name: &str) -> Result<Option<u32>, ApiError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u32>()
            .map(Some)
            .map_err(|_| ApiError::invalid_query(format!("'{name}' must be a non-negative integer"))),
    }
}

impl TryFrom<ImageQueryParams> for ImageListQuery {
    type Error = ApiError;

    fn try_from(params: ImageQueryParams) -> Result<Self, Self::Error> {
        let per_page = first_filled([params.per_page, params.per_page_snake, params.limit]);

        Ok(ImageListQuery(ImageQuery {
            search: first_filled([params.q, params.search]),
            page: parse_number(params.page, "page")?,
            per_page: parse_number(per_page, "perPage")?,
        }))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ImageListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ImageQueryParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        ImageListQuery::try_from(params)
    }
}
