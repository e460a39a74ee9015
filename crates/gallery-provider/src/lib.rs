//! # gallery-provider
//!
//! Client for the third-party photo API that supplies the gallery's images.
//! Implements `gallery_core::ImageProvider` on top of the Unsplash REST API.

pub mod error;
pub mod unsplash;

pub use error::ProviderClientError;
pub use unsplash::UnsplashClient;
