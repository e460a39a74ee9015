//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Content too short: min {min} characters")]
    ContentTooShort { min: usize },

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Image id is required")]
    MissingImageId,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Image provider error: {0}")]
    ProviderError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ContentTooShort { .. } => "CONTENT_TOO_SHORT",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::MissingImageId => "MISSING_IMAGE_ID",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::ProviderError(_) => "PROVIDER_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}
