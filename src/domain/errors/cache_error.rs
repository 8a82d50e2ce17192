//! Image cache error types.

use std::path::PathBuf;

use thiserror::Error;

use super::TransportError;

/// Result type for cache operations.
pub type CacheResult<T> = std::result::Result<T, CacheError>;

/// Errors that can occur during cache operations.
///
/// A missing entry is not an error; lookups return `Ok(None)` instead.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    /// Disk read or write failed.
    #[error("cache I/O error at {}: {message}", .path.display())]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying failure.
        message: String,
    },
    /// Bytes are not a decodable image.
    #[error("image decode error: {0}")]
    Decode(String),
    /// The download failed at the transport level.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl CacheError {
    /// Creates I/O error for a path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.into(),
            message: error.to_string(),
        }
    }
}
