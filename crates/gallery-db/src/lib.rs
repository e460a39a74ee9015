//! # gallery-db
//!
//! Database layer implementing the gallery repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Row models with SQLx `FromRow` derives
//! - Row to entity mappers
//! - Repository implementations for comments and like counters
//! - The bundled table schema, applied on demand
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gallery_common::AppConfig;
//! use gallery_db::{create_pool, PgLikeRepository, PoolConfig};
//! use gallery_core::LikeRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&PoolConfig::from(&config.database)).await?;
//!     let likes = PgLikeRepository::new(pool);
//!     let total = likes.increment("img42").await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, PgPool, PoolConfig};
pub use repositories::{PgCommentRepository, PgHealthCheck, PgLikeRepository};
pub use schema::{ensure_schema, SCHEMA_SQL};
