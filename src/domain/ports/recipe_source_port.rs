//! Recipe catalog port definition.

use async_trait::async_trait;
use url::Url;

use crate::domain::entities::Recipe;
use crate::domain::errors::CatalogError;

/// Port for loading the recipe catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetches and decodes every recipe at `url`.
    ///
    /// A single invalid record fails the whole batch.
    async fn fetch_recipes(&self, url: &Url) -> Result<Vec<Recipe>, CatalogError>;
}
