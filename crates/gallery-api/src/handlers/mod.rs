//! HTTP request handlers
//!
//! Handlers are thin: extract, call a service, wrap the result.

pub mod comments;
pub mod health;
pub mod images;
pub mod likes;
