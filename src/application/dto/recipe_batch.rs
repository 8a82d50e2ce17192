//! Recipe batch DTOs.

use crate::domain::entities::Recipe;

/// Counts of thumbnail prefetch outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefetchSummary {
    /// Served from the disk cache.
    pub cached: usize,
    /// Downloaded and stored.
    pub downloaded: usize,
    /// Downloaded but not an image.
    pub unavailable: usize,
    /// Failed with a transport or disk error.
    pub failed: usize,
}

impl PrefetchSummary {
    /// Returns the number of thumbnails attempted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.cached + self.downloaded + self.unavailable + self.failed
    }
}

/// Recipes loaded from the catalog plus the prefetch outcome.
#[derive(Debug, Clone)]
pub struct RecipeBatch {
    /// Recipes in catalog order.
    pub recipes: Vec<Recipe>,
    /// Thumbnail prefetch outcome.
    pub prefetch: PrefetchSummary,
}

impl RecipeBatch {
    /// Returns true if the catalog had no recipes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
