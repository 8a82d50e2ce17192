//! Cache file naming.
//!
//! A URL maps to `{key}.{ext}` inside the cache directory. The key depends on
//! the URL string only; the extension may also depend on the response.

use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::entities::{CacheKey, ResponseMetadata};

/// Extension used when neither the response nor the URL provides one.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Maps a recognized image media type to its file extension.
#[must_use]
pub fn extension_for_media_type(media_type: &str) -> Option<&'static str> {
    match media_type {
        "image/png" => Some("png"),
        "image/jpeg" => Some("jpg"),
        _ => None,
    }
}

/// Returns the extension of the last URL path segment, if usable as a file extension.
#[must_use]
pub fn url_extension(url: &Url) -> Option<&str> {
    let segment = url.path_segments()?.next_back()?;
    let (_, ext) = segment.rsplit_once('.')?;
    if ext.is_empty() || !ext.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext)
}

/// Chooses the extension: response content type, then URL path, then the default.
#[must_use]
pub fn file_extension<'a>(url: &'a Url, response: Option<&ResponseMetadata>) -> &'a str {
    if let Some(ext) = response
        .and_then(ResponseMetadata::media_type)
        .as_deref()
        .and_then(extension_for_media_type)
    {
        return ext;
    }
    url_extension(url).unwrap_or(DEFAULT_EXTENSION)
}

/// Returns the file name for a URL.
#[must_use]
pub fn file_name(url: &Url, response: Option<&ResponseMetadata>) -> String {
    format!(
        "{}.{}",
        CacheKey::from_url(url.as_str()),
        file_extension(url, response)
    )
}

/// Returns the full cache path for a URL.
#[must_use]
pub fn resolve_path(cache_dir: &Path, url: &Url, response: Option<&ResponseMetadata>) -> PathBuf {
    cache_dir.join(file_name(url, response))
}
