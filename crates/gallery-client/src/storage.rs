//! Durable storage for the set of images liked on this device
//!
//! The set is stored as `{"likedImages": [...]}` so the file reads the same
//! as the browser storage entry it replaces.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::ClientResult;

/// Storage key of the liked-image list
pub const LIKED_IMAGES_KEY: &str = "likedImages";

/// Persistence for the liked-image ids, in insertion order
pub trait LikedStore: Send + Sync {
    /// Load the stored ids; a missing entry is an empty list
    fn load(&self) -> ClientResult<Vec<String>>;

    /// Replace the stored ids
    fn save(&self, ids: &[String]) -> ClientResult<()>;
}

#[derive(Serialize, Deserialize, Default)]
struct LikedFile {
    #[serde(rename = "likedImages", default)]
    liked_images: Vec<String>,
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct FileLikedStore {
    path: PathBuf,
}

impl FileLikedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LikedStore for FileLikedStore {
    fn load(&self) -> ClientResult<Vec<String>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let file: LikedFile = serde_json::from_str(&text)?;
        Ok(file.liked_images)
    }

    fn save(&self, ids: &[String]) -> ClientResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = LikedFile {
            liked_images: ids.to_vec(),
        };
        fs::write(&self.path, serde_json::to_vec(&file)?)?;
        Ok(())
    }
}

/// In-memory store, for tests and headless use
#[derive(Debug, Default)]
pub struct MemoryLikedStore {
    ids: Mutex<Vec<String>>,
}

impl MemoryLikedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with some ids already liked
    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: Mutex::new(ids.into_iter().map(Into::into).collect()),
        }
    }

    /// Current contents
    pub fn snapshot(&self) -> Vec<String> {
        self.ids.lock().clone()
    }
}

impl LikedStore for MemoryLikedStore {
    fn load(&self) -> ClientResult<Vec<String>> {
        Ok(self.snapshot())
    }

    fn save(&self, ids: &[String]) -> ClientResult<()> {
        *self.ids.lock() = ids.to_vec();
        Ok(())
    }
}
