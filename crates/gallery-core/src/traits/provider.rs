//! Image provider trait - the third-party photo API

use async_trait::async_trait;

use crate::entities::ProviderPage;
use crate::error::DomainError;

/// Result type for provider calls
pub type ProviderResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Plain listing of the provider's feed
    async fn list(&self, page: u32, per_page: u32) -> ProviderResult<ProviderPage>;

    /// Keyword search
    async fn search(&self, query: &str, page: u32, per_page: u32) -> ProviderResult<ProviderPage>;
}
