//! Filesystem implementation of the storage port.

use std::io::Write;
use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::trace;

use crate::domain::errors::{CacheError, CacheResult};
use crate::domain::ports::Storage;

const TEMP_PREFIX: &str = ".incoming-";

/// Storage on the local filesystem.
///
/// Writes go to a temporary file in the destination directory and are renamed
/// into place, so a reader never sees a partially written file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl FsStorage {
    /// Creates filesystem storage.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> CacheResult<()> {
    let parent = path
        .parent()
        .ok_or_else(|| CacheError::io(path, "path has no parent directory"))?;

    let mut temp_file = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .tempfile_in(parent)
        .map_err(|e| CacheError::io(path, format!("failed to create temp file: {e}")))?;

    temp_file
        .write_all(bytes)
        .map_err(|e| CacheError::io(path, format!("failed to write temp file: {e}")))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| CacheError::io(path, format!("failed to sync temp file: {e}")))?;
    temp_file
        .persist(path)
        .map_err(|e| CacheError::io(path, format!("failed to persist file: {}", e.error)))?;

    Ok(())
}

#[async_trait]
impl Storage for FsStorage {
    async fn exists(&self, path: &Path) -> CacheResult<bool> {
        fs::try_exists(path)
            .await
            .map_err(|e| CacheError::io(path, format!("failed to stat file: {e}")))
    }

    async fn read(&self, path: &Path) -> CacheResult<Option<Bytes>> {
        match fs::read(path).await {
            Ok(bytes) => Ok(Some(Bytes::from(bytes))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CacheError::io(path, e)),
        }
    }

    async fn write(&self, path: &Path, bytes: Bytes) -> CacheResult<()> {
        let target = path.to_path_buf();
        tokio::task::spawn_blocking(move || write_atomic(&target, &bytes))
            .await
            .map_err(|e| CacheError::io(path, format!("write task failed: {e}")))??;

        trace!(path = %path.display(), "Persisted file");
        Ok(())
    }

    async fn remove_all(&self, dir: &Path) -> CacheResult<()> {
        match fs::remove_dir_all(dir).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CacheError::io(dir, e)),
        }
    }

    async fn create_dir_all(&self, dir: &Path) -> CacheResult<()> {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| CacheError::io(dir, format!("failed to create directory: {e}")))
    }
}
