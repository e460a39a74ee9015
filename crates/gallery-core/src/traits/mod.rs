//! Ports implemented by the infrastructure crates

mod provider;
mod repositories;

pub use provider::{ImageProvider, ProviderResult};
pub use repositories::{CommentRepository, HealthCheck, LikeRepository, RepoResult};
