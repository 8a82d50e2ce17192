//! Domain types for cached images.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use sha2::{Digest, Sha256};

const KEY_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Identifier of a cache entry.
/// Generated from a hash of the absolute URL string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derives the key for a URL string.
    ///
    /// The first eight bytes of the SHA-256 digest are read as a big-endian
    /// integer and rendered in base 36, so the same URL maps to the same key
    /// in every process.
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        let digest = Sha256::digest(url.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        Self(encode_base36(u64::from_be_bytes(prefix)))
    }

    /// Returns the inner string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn encode_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(13);
    while value > 0 {
        digits.push(KEY_ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.iter().rev().map(|&d| char::from(d)).collect()
}

/// Where an image was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// Loaded from the on-disk cache.
    DiskCache,
    /// Downloaded from the network.
    Network,
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DiskCache => write!(f, "disk"),
            Self::Network => write!(f, "network"),
        }
    }
}

/// A decoded image together with the raw bytes it was decoded from.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// The decoded image.
    pub image: Arc<image::DynamicImage>,
    /// Raw encoded bytes as stored on disk.
    pub bytes: Bytes,
    /// Cache file the bytes live at.
    pub path: PathBuf,
    /// Where the image came from.
    pub source: ImageSource,
}

impl LoadedImage {
    /// Creates a loaded image.
    #[must_use]
    pub fn new(
        image: Arc<image::DynamicImage>,
        bytes: Bytes,
        path: impl Into<PathBuf>,
        source: ImageSource,
    ) -> Self {
        Self {
            image,
            bytes,
            path: path.into(),
            source,
        }
    }

    /// Returns `(width, height)` in pixels.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    /// Returns the cache file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if served without a network request.
    #[must_use]
    pub const fn is_cache_hit(&self) -> bool {
        matches!(self.source, ImageSource::DiskCache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_is_pinned() {
        let key = CacheKey::from_url("https://example.com/image.jpg");
        assert_eq!(key.as_str(), "3hu5owb36n3q5");

        let key = CacheKey::from_url("https://example.com/image");
        assert_eq!(key.as_str(), "36r33cwp7bujh");
    }

    #[test]
    fn test_cache_key_consistency() {
        let url = "https://example.com/image.png";
        assert_eq!(CacheKey::from_url(url), CacheKey::from_url(url));
    }

    #[test]
    fn test_cache_key_is_filesystem_safe() {
        let key = CacheKey::from_url("https://example.com/a b/c?d=e#f");
        assert!(!key.as_str().is_empty());
        assert!(key.as_str().len() <= 13);
        assert!(
            key.as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }

    #[test]
    fn test_encode_base36() {
        assert_eq!(encode_base36(0), "0");
        assert_eq!(encode_base36(35), "z");
        assert_eq!(encode_base36(36), "10");
        assert_eq!(encode_base36(u64::MAX), "3w5e11264sgsf");
    }

    #[test]
    fn test_image_source_display() {
        assert_eq!(ImageSource::DiskCache.to_string(), "disk");
        assert_eq!(ImageSource::Network.to_string(), "network");
    }
}
