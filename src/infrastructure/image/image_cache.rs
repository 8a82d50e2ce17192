//! Persistent image cache keyed by URL.
//!
//! Lookups go disk first, then network. Downloaded bytes are stored exactly as
//! received; decoding only happens to hand an image back to the caller.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};

use bytes::Bytes;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, trace, warn};
use url::Url;

use crate::domain::entities::{ImageSource, LoadedImage, ResponseMetadata};
use crate::domain::errors::{CacheError, CacheResult};
use crate::domain::ports::{Storage, Transport};
use crate::infrastructure::config::project_dirs;

use super::cache_path;

/// Name of the cache directory under the platform cache root.
pub const CACHE_DIR_NAME: &str = "RecipeImages";

/// On-disk image cache.
///
/// Reads and writes for different paths run in parallel. Only `clear_all`
/// excludes every other disk operation, and no lock is held while a download
/// is in flight.
pub struct ImageCache {
    cache_dir: PathBuf,
    storage: Arc<dyn Storage>,
    transport: Arc<dyn Transport>,
    dir_guard: RwLock<()>,
    write_slots: parking_lot::Mutex<HashMap<PathBuf, Weak<Mutex<()>>>>,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("cache_dir", &self.cache_dir)
            .finish_non_exhaustive()
    }
}

impl ImageCache {
    /// Opens a cache rooted at `cache_dir`, creating the directory if needed.
    ///
    /// # Errors
    /// Returns error if the cache directory cannot be created.
    pub async fn open(
        cache_dir: PathBuf,
        storage: Arc<dyn Storage>,
        transport: Arc<dyn Transport>,
    ) -> CacheResult<Self> {
        storage.create_dir_all(&cache_dir).await?;
        debug!(path = %cache_dir.display(), "Image cache ready");

        Ok(Self {
            cache_dir,
            storage,
            transport,
            dir_guard: RwLock::new(()),
            write_slots: parking_lot::Mutex::new(HashMap::new()),
        })
    }

    /// Returns the cache directory.
    #[must_use]
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Returns where the bytes for `url` live.
    ///
    /// Pure: touches neither disk nor network. Without a response the
    /// extension comes from the URL (or the default), with one it comes from
    /// the declared content type when recognized.
    #[must_use]
    pub fn resolve_path(&self, url: &Url, response: Option<&ResponseMetadata>) -> PathBuf {
        cache_path::resolve_path(&self.cache_dir, url, response)
    }

    /// Loads and decodes the entry at `path`.
    ///
    /// Missing and undecodable entries both yield `Ok(None)`.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read.
    pub async fn load_cached(&self, path: &Path) -> CacheResult<Option<LoadedImage>> {
        let bytes = {
            let _dir = self.dir_guard.read().await;
            if !self.storage.exists(path).await? {
                trace!(path = %path.display(), "Disk cache miss");
                return Ok(None);
            }
            self.storage.read(path).await?
        };

        let Some(bytes) = bytes else {
            trace!(path = %path.display(), "Disk cache entry vanished");
            return Ok(None);
        };

        match decode(bytes.clone()).await {
            Ok(image) => {
                trace!(path = %path.display(), "Disk cache hit");
                Ok(Some(LoadedImage::new(
                    image,
                    bytes,
                    path,
                    ImageSource::DiskCache,
                )))
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring undecodable cache entry");
                Ok(None)
            }
        }
    }

    /// Writes `bytes` to `path`, replacing any previous entry.
    ///
    /// At most one store per path runs at a time.
    ///
    /// # Errors
    /// Returns error if the file cannot be written. Nothing is left at `path`
    /// in that case.
    pub async fn store(&self, bytes: Bytes, path: &Path) -> CacheResult<()> {
        let slot = self.write_slot(path);
        let _write = slot.lock().await;
        let _dir = self.dir_guard.read().await;

        let size = bytes.len();
        self.storage.write(path, bytes).await?;

        debug!(path = %path.display(), size = size, "Stored image in disk cache");
        Ok(())
    }

    /// Returns the image for `url`, downloading and storing it on a miss.
    ///
    /// The lookup uses the URL-only path; the store uses the path derived from
    /// the response, so the two can differ in extension. An undecodable
    /// download yields `Ok(None)` and is not stored.
    ///
    /// # Errors
    /// Returns error if the download fails or the bytes cannot be stored.
    pub async fn fetch(&self, url: &Url) -> CacheResult<Option<LoadedImage>> {
        let lookup_path = self.resolve_path(url, None);

        match self.load_cached(&lookup_path).await {
            Ok(Some(hit)) => return Ok(Some(hit)),
            Ok(None) => {}
            Err(e) => {
                warn!(url = %url, error = %e, "Disk cache read failed, downloading instead");
            }
        }

        debug!(url = %url, "Downloading image");
        let resource = self.transport.get(url).await?;

        let image = match decode(resource.bytes.clone()).await {
            Ok(image) => image,
            Err(e) => {
                debug!(
                    url = %url,
                    status = resource.metadata.status,
                    error = %e,
                    "Downloaded payload is not an image"
                );
                return Ok(None);
            }
        };

        let store_path = self.resolve_path(url, Some(&resource.metadata));
        self.store(resource.bytes.clone(), &store_path).await?;

        Ok(Some(LoadedImage::new(
            image,
            resource.bytes,
            store_path,
            ImageSource::Network,
        )))
    }

    /// Downloads `url` and stores it under its response-aware path.
    ///
    /// Unlike [`fetch`](Self::fetch) this skips the disk lookup and rejects
    /// undecodable payloads with an error.
    ///
    /// # Errors
    /// Returns error if the download fails, the payload is not an image, or
    /// the bytes cannot be stored.
    pub async fn warm(&self, url: &Url) -> CacheResult<PathBuf> {
        let resource = self.transport.get(url).await?;
        decode(resource.bytes.clone()).await?;

        let path = self.resolve_path(url, Some(&resource.metadata));
        self.store(resource.bytes, &path).await?;
        Ok(path)
    }

    /// Removes every entry and recreates the empty directory.
    ///
    /// Failures are logged and otherwise ignored.
    pub async fn clear_all(&self) {
        let _dir = self.dir_guard.write().await;

        if let Err(e) = self.storage.remove_all(&self.cache_dir).await {
            warn!(path = %self.cache_dir.display(), error = %e, "Failed to remove image cache");
        }
        if let Err(e) = self.storage.create_dir_all(&self.cache_dir).await {
            warn!(path = %self.cache_dir.display(), error = %e, "Failed to recreate image cache");
        }

        info!(path = %self.cache_dir.display(), "Cleared image cache");
    }

    fn write_slot(&self, path: &Path) -> Arc<Mutex<()>> {
        let mut slots = self.write_slots.lock();
        if let Some(slot) = slots.get(path).and_then(Weak::upgrade) {
            return slot;
        }

        slots.retain(|_, slot| slot.strong_count() > 0);
        let slot = Arc::new(Mutex::new(()));
        slots.insert(path.to_path_buf(), Arc::downgrade(&slot));
        slot
    }
}

async fn decode(bytes: Bytes) -> CacheResult<Arc<image::DynamicImage>> {
    tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
        .await
        .map_err(|e| CacheError::Decode(format!("decode task failed: {e}")))?
        .map(Arc::new)
        .map_err(|e| CacheError::Decode(e.to_string()))
}

/// Returns the default cache directory path.
#[must_use]
pub fn default_cache_dir() -> PathBuf {
    project_dirs().map_or_else(
        || std::env::temp_dir().join("recipe-fetch").join(CACHE_DIR_NAME),
        |dirs| dirs.cache_dir().join(CACHE_DIR_NAME),
    )
}
