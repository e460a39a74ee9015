//! In-memory repositories for end-to-end tests without PostgreSQL

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use gallery_core::entities::{Comment, CommentId, NewComment};
use gallery_core::traits::{CommentRepository, HealthCheck, LikeRepository, RepoResult};

/// Comments kept in a vector; ids count up from 1 and are never reused
#[derive(Debug, Default)]
pub struct InMemoryComments {
    rows: Mutex<Vec<Comment>>,
    last_id: AtomicI64,
}

impl InMemoryComments {
    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.lock().is_empty()
    }
}

#[async_trait]
impl CommentRepository for InMemoryComments {
    async fn find_by_image(&self, image_id: &str) -> RepoResult<Vec<Comment>> {
        let mut found: Vec<Comment> = self
            .rows
            .lock()
            .iter()
            .filter(|c| c.image_id == image_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(found)
    }

    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let mut rows = self.rows.lock();
        let now = Utc::now();
        let stored = Comment {
            id: self.last_id.fetch_add(1, Ordering::SeqCst) + 1,
            image_id: comment.image_id.clone(),
            content: comment.content.clone(),
            user_name: comment.user_name.clone(),
            avatar_url: comment.avatar_url.clone(),
            created_at: now,
            updated_at: now,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn update_content(&self, id: CommentId, content: &str) -> RepoResult<Option<Comment>> {
        let mut rows = self.rows.lock();
        Ok(rows.iter_mut().find(|c| c.id == id).map(|c| {
            c.content = content.to_string();
            c.updated_at = Utc::now();
            c.clone()
        }))
    }

    async fn delete(&self, id: CommentId) -> RepoResult<bool> {
        let mut rows = self.rows.lock();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        Ok(rows.len() < before)
    }
}

/// Like counters in a map
#[derive(Debug, Default)]
pub struct InMemoryLikes {
    counts: Mutex<HashMap<String, i64>>,
}

#[async_trait]
impl LikeRepository for InMemoryLikes {
    async fn increment(&self, image_id: &str) -> RepoResult<i64> {
        let mut counts = self.counts.lock();
        let likes = counts.entry(image_id.to_string()).or_insert(0);
        *likes += 1;
        Ok(*likes)
    }

    async fn find_counts(&self, image_ids: &[String]) -> RepoResult<HashMap<String, i64>> {
        let counts = self.counts.lock();
        Ok(image_ids
            .iter()
            .filter_map(|id| counts.get(id).map(|likes| (id.clone(), *likes)))
            .collect())
    }
}

/// Store that always answers the health ping
#[derive(Debug, Default)]
pub struct AlwaysHealthy;

#[async_trait]
impl HealthCheck for AlwaysHealthy {
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

/// Store whose every call fails, for 500 and readiness paths
#[derive(Debug, Default)]
pub struct FailingStore;

fn unavailable() -> gallery_core::DomainError {
    gallery_core::DomainError::DatabaseError("connection refused".to_string())
}

#[async_trait]
impl CommentRepository for FailingStore {
    async fn find_by_image(&self, _image_id: &str) -> RepoResult<Vec<Comment>> {
        Err(unavailable())
    }

    async fn create(&self, _comment: &NewComment) -> RepoResult<Comment> {
        Err(unavailable())
    }

    async fn update_content(&self, _id: CommentId, _content: &str) -> RepoResult<Option<Comment>> {
        Err(unavailable())
    }

    async fn delete(&self, _id: CommentId) -> RepoResult<bool> {
        Err(unavailable())
    }
}

#[async_trait]
impl LikeRepository for FailingStore {
    async fn increment(&self, _image_id: &str) -> RepoResult<i64> {
        Err(unavailable())
    }

    async fn find_counts(&self, _image_ids: &[String]) -> RepoResult<HashMap<String, i64>> {
        Err(unavailable())
    }
}

#[async_trait]
impl HealthCheck for FailingStore {
    async fn ping(&self) -> RepoResult<()> {
        Err(unavailable())
    }
}
