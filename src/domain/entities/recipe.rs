//! Recipe entity as served by the catalog endpoint.

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// A single recipe.
///
/// `uuid`, `cuisine` and `name` are required; a record missing any of them, or
/// carrying a malformed `uuid`, fails deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe identifier (`uuid` in JSON).
    #[serde(rename = "uuid")]
    pub id: Uuid,
    /// Cuisine name.
    pub cuisine: String,
    /// Recipe name.
    pub name: String,
    /// Full-size photo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url_large: Option<Url>,
    /// Thumbnail photo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url_small: Option<Url>,
    /// Original recipe page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<Url>,
    /// Video walkthrough.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<Url>,
}

impl Recipe {
    /// Creates a recipe without links.
    #[must_use]
    pub fn new(id: Uuid, cuisine: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            cuisine: cuisine.into(),
            name: name.into(),
            photo_url_large: None,
            photo_url_small: None,
            source_url: None,
            youtube_url: None,
        }
    }

    /// Sets both photo URLs.
    #[must_use]
    pub fn with_photos(mut self, large: Option<Url>, small: Option<Url>) -> Self {
        self.photo_url_large = large;
        self.photo_url_small = small;
        self
    }
}
