//! Cache storage port definition.

use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::errors::CacheResult;

/// Port for the filesystem operations the image cache needs.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Returns true if a file exists at `path`.
    ///
    /// Only a confirmed absence is `Ok(false)`; any other lookup failure is an
    /// error.
    async fn exists(&self, path: &Path) -> CacheResult<bool>;

    /// Reads the file at `path`. Returns `Ok(None)` if it does not exist.
    async fn read(&self, path: &Path) -> CacheResult<Option<Bytes>>;

    /// Replaces the file at `path` with `bytes`.
    ///
    /// Readers observe either the previous contents or all of `bytes`, and a
    /// failed write leaves nothing at `path`.
    async fn write(&self, path: &Path, bytes: Bytes) -> CacheResult<()>;

    /// Removes `dir` and everything below it. A missing directory is not an error.
    async fn remove_all(&self, dir: &Path) -> CacheResult<()>;

    /// Creates `dir` and any missing parents.
    async fn create_dir_all(&self, dir: &Path) -> CacheResult<()>;
}
