//! Provider client errors

use gallery_core::DomainError;

/// Errors raised while talking to the photo provider
#[derive(Debug, thiserror::Error)]
pub enum ProviderClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid provider base URL: {0:?}")]
    InvalidBaseUrl(String),

    #[error("Access key contains characters not allowed in a header")]
    InvalidAccessKey,
}

impl From<ProviderClientError> for DomainError {
    fn from(err: ProviderClientError) -> Self {
        DomainError::ProviderError(err.to_string())
    }
}
