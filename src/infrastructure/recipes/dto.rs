//! Wire format of the catalog endpoint.

use serde::Deserialize;

use crate::domain::entities::Recipe;

/// Top-level catalog document.
#[derive(Debug, Deserialize)]
pub struct RecipeCatalogResponse {
    /// Every recipe in the catalog.
    pub recipes: Vec<Recipe>,
}
