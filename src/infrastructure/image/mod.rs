//! Image caching infrastructure.
//!
//! This module provides:
//! - URL to cache file naming
//! - Atomic filesystem storage
//! - The disk-then-network image cache

pub mod cache_path;
pub mod disk_storage;
pub mod image_cache;
#[cfg(test)]
pub(crate) mod test_support;

pub use cache_path::{DEFAULT_EXTENSION, file_extension, resolve_path};
pub use disk_storage::FsStorage;
pub use image_cache::{CACHE_DIR_NAME, ImageCache, default_cache_dir};
