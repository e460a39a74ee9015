//! Service layer error types
//!
//! Three outcomes reach the HTTP layer: a client mistake (400), a missing
//! resource (404), or an infrastructure failure (500). Failures carry a fixed
//! public message; the underlying domain error is kept as the source so it
//! can be logged without being shown to clients.

use gallery_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Input rejected before touching the store
    Validation { code: &'static str, message: String },

    /// Resource not found
    NotFound { resource: &'static str, id: String },

    /// Store or provider failure
    Failure {
        message: &'static str,
        source: DomainError,
    },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation { message, .. } => write!(f, "{message}"),
            Self::NotFound { resource, .. } => write!(f, "{resource} not found."),
            Self::Failure { message, .. } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Failure { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a validation error from a domain rule, with a caller-chosen message
    pub fn rule(err: &DomainError, msg: impl Into<String>) -> Self {
        Self::Validation {
            code: err.code(),
            message: msg.into(),
        }
    }

    /// Create a failure with a public message and a logged source
    pub fn failure(message: &'static str, source: DomainError) -> Self {
        Self::Failure { message, source }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::NotFound { .. } => 404,
            Self::Failure { .. } => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { code, .. } => *code,
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Failure { .. } => "INTERNAL_ERROR",
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
