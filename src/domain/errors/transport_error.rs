//! Transport error types.

use thiserror::Error;

/// Failures of a single HTTP request below the application level.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum TransportError {
    #[error("failed to create HTTP client: {message}")]
    ClientSetup { message: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("failed to connect to {url}: {message}")]
    Connect { url: String, message: String },

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("failed to read response body from {url}: {message}")]
    Body { url: String, message: String },
}

impl TransportError {
    /// Creates client setup error.
    #[must_use]
    pub fn client_setup(message: impl Into<String>) -> Self {
        Self::ClientSetup {
            message: message.into(),
        }
    }

    /// Creates timeout error.
    #[must_use]
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates connection error.
    #[must_use]
    pub fn connect(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Connect {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates request error.
    #[must_use]
    pub fn request(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Request {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates body read error.
    #[must_use]
    pub fn body(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Body {
            url: url.into(),
            message: message.into(),
        }
    }
}
