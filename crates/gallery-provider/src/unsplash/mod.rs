//! Unsplash REST API client

mod client;
mod models;

pub use client::UnsplashClient;
pub use models::{UnsplashPhoto, UnsplashSearchResponse, UnsplashTag, UnsplashUrls, UnsplashUser};
