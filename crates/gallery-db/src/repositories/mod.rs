//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in gallery-core.

mod comment;
mod error;
mod health;
mod like;

pub use comment::PgCommentRepository;
pub use health::PgHealthCheck;
pub use like::PgLikeRepository;
