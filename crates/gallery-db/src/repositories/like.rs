//! PostgreSQL implementation of LikeRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gallery_core::entities::ImageLike;
use gallery_core::traits::{LikeRepository, RepoResult};

use crate::models::ImageLikeModel;

use super::error::map_db_error;

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn increment(&self, image_id: &str) -> RepoResult<i64> {
        // Single statement: row lock on conflict serializes concurrent increments
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO image_likes (image_id, likes)
            VALUES ($1, 1)
            ON CONFLICT (image_id) DO UPDATE SET likes = image_likes.likes + 1
            RETURNING likes
            "#,
        )
        .bind(image_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, image_ids), fields(count = image_ids.len()))]
    async fn find_counts(&self, image_ids: &[String]) -> RepoResult<HashMap<String, i64>> {
        if image_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let results = sqlx::query_as::<_, ImageLikeModel>(
            r#"
            SELECT image_id, likes
            FROM image_likes
            WHERE image_id = ANY($1)
            "#,
        )
        .bind(image_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(ImageLike::from)
            .map(|like| (like.image_id, like.likes))
            .collect())
    }
}
