//! Remote resource types returned by the transport.

use bytes::Bytes;

/// Response metadata the cache and catalog care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// HTTP status code.
    pub status: u16,
    /// Raw `Content-Type` header, if any.
    pub content_type: Option<String>,
}

impl ResponseMetadata {
    /// Creates response metadata.
    #[must_use]
    pub fn new(status: u16, content_type: Option<String>) -> Self {
        Self {
            status,
            content_type,
        }
    }

    /// Metadata for a 200 response with the given content type.
    #[must_use]
    pub fn ok(content_type: impl Into<String>) -> Self {
        Self::new(200, Some(content_type.into()))
    }

    /// Returns true for 2xx status codes.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the media type without parameters, lowercased.
    ///
    /// `"Image/PNG; charset=binary"` yields `"image/png"`.
    #[must_use]
    pub fn media_type(&self) -> Option<String> {
        let raw = self.content_type.as_deref()?;
        let media_type = raw.split(';').next().unwrap_or(raw).trim();
        if media_type.is_empty() {
            None
        } else {
            Some(media_type.to_ascii_lowercase())
        }
    }
}

/// Bytes and metadata of a completed GET.
#[derive(Debug, Clone)]
pub struct FetchedResource {
    /// Full response body.
    pub bytes: Bytes,
    /// Response metadata.
    pub metadata: ResponseMetadata,
}

impl FetchedResource {
    /// Creates a fetched resource.
    #[must_use]
    pub fn new(bytes: impl Into<Bytes>, metadata: ResponseMetadata) -> Self {
        Self {
            bytes: bytes.into(),
            metadata,
        }
    }
}
