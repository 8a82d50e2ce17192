//! HTTP client for the recipe catalog endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use super::dto::RecipeCatalogResponse;
use crate::domain::entities::Recipe;
use crate::domain::errors::CatalogError;
use crate::domain::ports::{RecipeSource, Transport};

/// Production recipe list.
pub const DEFAULT_CATALOG_URL: &str = "https://d3jbb8n5wk0qxi.cloudfront.net/recipes.json";
/// Recipe list containing an invalid record.
pub const MALFORMED_CATALOG_URL: &str =
    "https://d3jbb8n5wk0qxi.cloudfront.net/recipes-malformed.json";
/// Recipe list with no recipes.
pub const EMPTY_CATALOG_URL: &str = "https://d3jbb8n5wk0qxi.cloudfront.net/recipes-empty.json";

/// Recipe catalog client.
#[derive(Clone)]
pub struct RecipeApiClient {
    transport: Arc<dyn Transport>,
}

impl RecipeApiClient {
    /// Creates a client issuing requests through `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl RecipeSource for RecipeApiClient {
    async fn fetch_recipes(&self, url: &Url) -> Result<Vec<Recipe>, CatalogError> {
        debug!(url = %url, "Fetching recipe catalog");

        let resource = self.transport.get(url).await?;

        if !resource.metadata.is_success() {
            warn!(url = %url, status = resource.metadata.status, "Recipe catalog request rejected");
            return Err(CatalogError::InvalidResponse {
                status: resource.metadata.status,
            });
        }

        let catalog: RecipeCatalogResponse =
            serde_json::from_slice(&resource.bytes).map_err(|e| {
                warn!(url = %url, error = %e, "Failed to decode recipe catalog");
                CatalogError::Decoding(e.to_string())
            })?;

        debug!(count = catalog.recipes.len(), "Decoded recipe catalog");
        Ok(catalog.recipes)
    }
}
