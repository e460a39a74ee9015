//! In-memory fakes for service unit tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use parking_lot::Mutex;

use gallery_core::entities::{Comment, CommentId, ImageUrls, NewComment, ProviderImage, ProviderPage};
use gallery_core::traits::{
    CommentRepository, HealthCheck, ImageProvider, LikeRepository, ProviderResult, RepoResult,
};
use gallery_core::DomainError;

use super::context::ServiceContext;

fn store_down() -> DomainError {
    DomainError::DatabaseError("store unavailable".to_string())
}

#[derive(Default)]
pub struct FakeComments {
    rows: Mutex<Vec<Comment>>,
    last_id: AtomicI64,
    pub fail: AtomicBool,
}

impl FakeComments {
    pub fn rows(&self) -> Vec<Comment> {
        self.rows.lock().clone()
    }

    fn check(&self) -> RepoResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            Err(store_down())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CommentRepository for FakeComments {
    async fn find_by_image(&self, image_id: &str) -> RepoResult<Vec<Comment>> {
        self.check()?;
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
        self.check()?;
        let mut rows = self.rows.lock();
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        // Spread creation times so ordering is deterministic
        let created_at = Utc::now() + Duration::milliseconds(id);
        let stored = Comment {
            id,
            image_id: comment.image_id.clone(),
            content: comment.content.clone(),
            user_name: comment.user_name.clone(),
            avatar_url: comment.avatar_url.clone(),
            created_at,
            updated_at: created_at,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn update_content(&self, id: CommentId, content: &str) -> RepoResult<Option<Comment>> {
        self.check()?;
        let mut rows = self.rows.lock();
        Ok(rows.iter_mut().find(|c| c.id == id).map(|c| {
            c.content = content.to_string();
            c.updated_at = c.created_at + Duration::seconds(1);
            c.clone()
        }))
    }

    async fn delete(&self, id: CommentId) -> RepoResult<bool> {
        self.check()?;
        let mut rows = self.rows.lock();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        Ok(rows.len() != before)
    }
}

#[derive(Default)]
pub struct FakeLikes {
    counts: Mutex<HashMap<String, i64>>,
    pub fail: AtomicBool,
    pub lookups: Mutex<Vec<Vec<String>>>,
}

impl FakeLikes {
    pub fn set(&self, image_id: &str, likes: i64) {
        self.counts.lock().insert(image_id.to_string(), likes);
    }
}

#[async_trait]
impl LikeRepository for FakeLikes {
    async fn increment(&self, image_id: &str) -> RepoResult<i64> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(store_down());
        }
        let mut counts = self.counts.lock();
        let likes = counts.entry(image_id.to_string()).or_insert(0);
        *likes += 1;
        Ok(*likes)
    }

    async fn find_counts(&self, image_ids: &[String]) -> RepoResult<HashMap<String, i64>> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(store_down());
        }
        self.lookups.lock().push(image_ids.to_vec());
        let counts = self.counts.lock();
        Ok(image_ids
            .iter()
            .filter_map(|id| counts.get(id).map(|likes| (id.clone(), *likes)))
            .collect())
    }
}

/// Which provider endpoint was called, with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    List { page: u32, per_page: u32 },
    Search { query: String, page: u32, per_page: u32 },
}

#[derive(Default)]
pub struct FakeProvider {
    pub images: Mutex<Vec<ProviderImage>>,
    pub total: Mutex<Option<u64>>,
    pub calls: Mutex<Vec<ProviderCall>>,
    pub fail: AtomicBool,
}

impl FakeProvider {
    pub fn with_images(images: Vec<ProviderImage>) -> Self {
        let provider = Self::default();
        *provider.images.lock() = images;
        provider
    }

    fn page(&self, per_page: u32) -> ProviderResult<ProviderPage> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::ProviderError("rate limited".to_string()));
        }
        let images = self.images.lock().clone();
        let total = self.total.lock().unwrap_or(images.len() as u64);
        Ok(ProviderPage::from_total(images, total, per_page))
    }
}

#[async_trait]
impl ImageProvider for FakeProvider {
    async fn list(&self, page: u32, per_page: u32) -> ProviderResult<ProviderPage> {
        self.calls.lock().push(ProviderCall::List { page, per_page });
        self.page(per_page)
    }

    async fn search(&self, query: &str, page: u32, per_page: u32) -> ProviderResult<ProviderPage> {
        self.calls.lock().push(ProviderCall::Search {
            query: query.to_string(),
            page,
            per_page,
        });
        self.page(per_page)
    }
}

#[derive(Default)]
pub struct FakeHealth;

#[async_trait]
impl HealthCheck for FakeHealth {
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

pub fn provider_image(id: &str, likes: i64) -> ProviderImage {
    ProviderImage {
        id: id.to_string(),
        alt_description: Some(format!("{id} alt")),
        description: None,
        urls: ImageUrls {
            thumb: format!("https://img/{id}/thumb"),
            small: None,
            regular: None,
            full: format!("https://img/{id}/full"),
        },
        user_name: "Photographer".to_string(),
        likes,
        tags: vec![],
    }
}

/// Shared handles to the fakes behind a context
#[derive(Default, Clone)]
pub struct TestBackend {
    pub comments: Arc<FakeComments>,
    pub likes: Arc<FakeLikes>,
    pub provider: Arc<FakeProvider>,
}

impl TestBackend {
    pub fn context(&self) -> ServiceContext {
        ServiceContext::builder()
            .comment_repo(self.comments.clone())
            .like_repo(self.likes.clone())
            .image_provider(self.provider.clone())
            .health_check(Arc::new(FakeHealth))
            .build()
            .unwrap()
    }
}
