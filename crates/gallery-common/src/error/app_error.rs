//! Application error types
//!
//! Errors raised while assembling and running the application
//! (configuration, store connection, listener binding).

use serde::Serialize;
use std::fmt;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // External service errors
    #[error("External service error: {0}")]
    ExternalService(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Listener and serving errors
    #[error("Server error: {context}")]
    Server {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// Create a configuration error
    #[must_use]
    pub fn config(msg: impl fmt::Display) -> Self {
        Self::Config(msg.to_string())
    }

    /// Create a server error, keeping the I/O error as the source
    #[must_use]
    pub fn server(context: impl fmt::Display, source: std::io::Error) -> Self {
        Self::Server {
            context: context.to_string(),
            source,
        }
    }
}

/// Error response body returned to HTTP clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
