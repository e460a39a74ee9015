//! Gallery state machine
//!
//! Owns the displayed images, pagination and the local liked set. Likes are
//! optimistic: the displayed count changes at once and the server is told in
//! the background.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::api::GalleryApi;
use crate::storage::LikedStore;
use crate::types::{Image, ImageQuery};

/// Images requested per page
pub const DEFAULT_PER_PAGE: u32 = 12;

const FETCH_FAILED: &str = "Failed to fetch images.";

/// Gallery load status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryStatus {
    Loading,
    Loaded,
    Empty,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchMode {
    Reset,
    Append,
}

/// Paginated image gallery
pub struct Gallery {
    api: GalleryApi,
    store: Arc<dyn LikedStore>,
    liked: Vec<String>,
    images: Vec<Image>,
    status: GalleryStatus,
    error: Option<String>,
    search_term: String,
    page: u32,
    total_pages: u32,
    per_page: u32,
    selected: Option<String>,
}

impl Gallery {
    /// Create a gallery; nothing is fetched until [`Gallery::refresh`]
    ///
    /// An unreadable liked set starts empty.
    pub fn new(api: GalleryApi, store: Arc<dyn LikedStore>) -> Self {
        let liked = store.load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read liked images; starting empty");
            Vec::new()
        });

        Self {
            api,
            store,
            liked,
            images: Vec::new(),
            status: GalleryStatus::Loading,
            error: None,
            search_term: String::new(),
            page: 1,
            total_pages: 1,
            per_page: DEFAULT_PER_PAGE,
            selected: None,
        }
    }

    /// Change the page size
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    pub fn status(&self) -> GalleryStatus {
        self.status
    }

    /// Banner message, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether this device has liked the image
    pub fn is_liked(&self, image_id: &str) -> bool {
        self.liked.iter().any(|id| id == image_id)
    }

    /// Ids liked on this device, oldest first
    pub fn liked_ids(&self) -> &[String] {
        &self.liked
    }

    /// Update the search box without fetching
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Reload the current page
    pub async fn refresh(&mut self) {
        self.fetch(self.page, FetchMode::Reset).await;
    }

    /// Search from the first page
    pub async fn search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
        self.fetch(1, FetchMode::Reset).await;
    }

    /// Jump to a page, clamped to the known range
    pub async fn go_to_page(&mut self, page: u32) {
        let page = page.clamp(1, self.total_pages.max(1));
        self.page = page;
        self.fetch(page, FetchMode::Reset).await;
    }

    pub async fn next_page(&mut self) {
        self.go_to_page(self.page.saturating_add(1)).await;
    }

    pub async fn prev_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1)).await;
    }

    /// Append the next page to the current images; a no-op on the last page
    pub async fn load_more(&mut self) {
        if !self.has_next() {
            debug!(page = self.page, "No more pages to load");
            return;
        }
        let next = self.page + 1;
        if self.fetch(next, FetchMode::Append).await {
            self.page = next.min(self.total_pages);
        }
    }

    async fn fetch(&mut self, page: u32, mode: FetchMode) -> bool {
        self.status = GalleryStatus::Loading;

        let query = ImageQuery {
            page,
            per_page: self.per_page,
            search: self.search_term.clone(),
        };

        match self.api.list_images(&query).await {
            Ok(result) => {
                let mut images = result.images;
                for image in &mut images {
                    image.liked = self.is_liked(&image.id);
                }

                match mode {
                    FetchMode::Reset => self.images = images,
                    FetchMode::Append => self.images.extend(images),
                }

                self.total_pages = result.total_pages.max(1);
                self.page = self.page.min(self.total_pages);
                self.error = None;
                self.status = self.settled_status();
                debug!(page, count = self.images.len(), "Images loaded");
                true
            }
            Err(e) => {
                warn!(error = %e, page, "Error fetching images");
                if mode == FetchMode::Reset {
                    self.images.clear();
                }
                self.error = Some(FETCH_FAILED.to_string());
                self.status = GalleryStatus::Error;
                false
            }
        }
    }

    fn settled_status(&self) -> GalleryStatus {
        if self.images.is_empty() {
            GalleryStatus::Empty
        } else {
            GalleryStatus::Loaded
        }
    }

    /// Hide the error banner
    pub fn dismiss_error(&mut self) {
        self.error = None;
        if self.status == GalleryStatus::Error {
            self.status = self.settled_status();
        }
    }

    /// Like or unlike an image on this device
    ///
    /// The liked set is saved and the displayed image updated before the
    /// server is contacted. The server only counts likes, so both directions
    /// send a like; failures are logged and never rolled back.
    ///
    /// Returns the handle of the background request, or `None` when no Tokio
    /// runtime is available to send it.
    pub fn toggle_like(&mut self, image_id: &str) -> Option<JoinHandle<()>> {
        if let Some(pos) = self.liked.iter().position(|id| id == image_id) {
            self.liked.remove(pos);
        } else {
            self.liked.push(image_id.to_string());
        }

        if let Err(e) = self.store.save(&self.liked) {
            warn!(error = %e, image_id, "Failed to save liked images");
        }

        if let Some(image) = self.images.iter_mut().find(|img| img.id == image_id) {
            image.likes = if image.liked {
                (image.likes - 1).max(0)
            } else {
                image.likes + 1
            };
            image.liked = !image.liked;
        }

        let Ok(runtime) = Handle::try_current() else {
            warn!(image_id, "No Tokio runtime; like not sent to the server");
            return None;
        };

        let api = self.api.clone();
        let image_id = image_id.to_string();
        Some(runtime.spawn(async move {
            if let Err(e) = api.like_image(&image_id).await {
                warn!(error = %e, image_id = %image_id, "Failed to like image");
            }
        }))
    }

    /// Open the detail view; returns false when the image is not displayed
    pub fn open(&mut self, image_id: &str) -> bool {
        let found = self.images.iter().any(|img| img.id == image_id);
        if found {
            self.selected = Some(image_id.to_string());
        }
        found
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Image in the detail view, reflecting any like changes
    pub fn selected(&self) -> Option<&Image> {
        let id = self.selected.as_deref()?;
        self.images.iter().find(|img| img.id == id)
    }
}

impl std::fmt::Debug for Gallery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gallery")
            .field("status", &self.status)
            .field("page", &self.page)
            .field("total_pages", &self.total_pages)
            .field("images", &self.images.len())
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}
