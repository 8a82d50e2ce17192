//! Recipe list loading use case.

use std::path::PathBuf;
use std::sync::Arc;

use futures_util::{StreamExt, stream};
use tracing::{debug, info, warn};
use url::Url;

use crate::application::dto::{PrefetchSummary, RecipeBatch};
use crate::domain::entities::{LoadedImage, Recipe};
use crate::domain::errors::CatalogError;
use crate::domain::ports::RecipeSource;
use crate::infrastructure::image::ImageCache;

const DEFAULT_PREFETCH_CONCURRENCY: usize = 6;

/// Loads the recipe list and keeps its images cached.
#[derive(Clone)]
pub struct LoadRecipesUseCase {
    source: Arc<dyn RecipeSource>,
    images: Arc<ImageCache>,
    prefetch_concurrency: usize,
}

impl LoadRecipesUseCase {
    /// Creates new use case.
    #[must_use]
    pub fn new(source: Arc<dyn RecipeSource>, images: Arc<ImageCache>) -> Self {
        Self {
            source,
            images,
            prefetch_concurrency: DEFAULT_PREFETCH_CONCURRENCY,
        }
    }

    /// Sets how many thumbnails are fetched at once.
    #[must_use]
    pub fn with_prefetch_concurrency(mut self, concurrency: usize) -> Self {
        self.prefetch_concurrency = concurrency.max(1);
        self
    }

    /// Loads recipes from `url` and prefetches their thumbnails.
    ///
    /// Thumbnail failures are logged and counted, never returned.
    ///
    /// # Errors
    /// Returns error if the catalog cannot be fetched or decoded.
    pub async fn execute(&self, url: &Url) -> Result<RecipeBatch, CatalogError> {
        let recipes = self.source.fetch_recipes(url).await.map_err(|e| {
            warn!(url = %url, error = %e, "Failed to load recipes");
            e
        })?;
        info!(count = recipes.len(), "Loaded recipes");

        let prefetch = self.prefetch_thumbnails(&recipes).await;
        info!(
            cached = prefetch.cached,
            downloaded = prefetch.downloaded,
            unavailable = prefetch.unavailable,
            failed = prefetch.failed,
            "Thumbnail prefetch complete"
        );

        Ok(RecipeBatch { recipes, prefetch })
    }

    /// Fetches every small photo through the image cache.
    pub async fn prefetch_thumbnails(&self, recipes: &[Recipe]) -> PrefetchSummary {
        let images = &self.images;
        let outcomes: Vec<_> = stream::iter(recipes.iter().filter_map(|r| r.photo_url_small.as_ref()))
            .map(|url| async move { (url, images.fetch(url).await) })
            .buffer_unordered(self.prefetch_concurrency)
            .collect()
            .await;

        let mut summary = PrefetchSummary::default();
        for (url, outcome) in outcomes {
            match outcome {
                Ok(Some(image)) if image.is_cache_hit() => summary.cached += 1,
                Ok(Some(_)) => summary.downloaded += 1,
                Ok(None) => {
                    debug!(url = %url, "Thumbnail is not an image");
                    summary.unavailable += 1;
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "Failed to prefetch thumbnail");
                    summary.failed += 1;
                }
            }
        }
        summary
    }

    /// Returns the image at `url`, or `None` when there is no URL or no image.
    pub async fn image_for(&self, url: Option<&Url>) -> Option<LoadedImage> {
        let url = url?;
        match self.images.fetch(url).await {
            Ok(image) => image,
            Err(e) => {
                warn!(url = %url, error = %e, "Failed to load image");
                None
            }
        }
    }

    /// Returns where the image at `url` is looked up on disk.
    #[must_use]
    pub fn cache_path_for(&self, url: &Url) -> PathBuf {
        self.images.resolve_path(url, None)
    }

    /// Clears the image cache.
    pub async fn clear_images(&self) {
        self.images.clear_all().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{FetchedResource, ResponseMetadata};
    use crate::domain::errors::TransportError;
    use crate::domain::ports::mocks::{MemoryStorage, MockRecipeSource, MockTransport};
    use crate::infrastructure::image::test_support::{encoded_image, jpeg_response};
    use bytes::Bytes;
    use image::ImageFormat;
    use uuid::Uuid;

    const CATALOG: &str = "https://example.com/recipes.json";

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn recipe(name: &str, small: Option<&str>) -> Recipe {
        Recipe::new(Uuid::new_v4(), "British", name).with_photos(None, small.map(url))
    }

    async fn image_cache(transport: Arc<MockTransport>, storage: Arc<MemoryStorage>) -> Arc<ImageCache> {
        Arc::new(
            ImageCache::open(PathBuf::from("/cache/RecipeImages"), storage, transport)
                .await
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_execute_prefetches_small_photos() {
        let recipes = vec![
            recipe("Bakewell Tart", Some("https://example.com/1/small.jpg")),
            recipe("Apam Balik", Some("https://example.com/2/small.jpg")),
            recipe("Battenberg Cake", None),
        ];
        let mut source = MockRecipeSource::new();
        source
            .expect_fetch_recipes()
            .withf(|u| u.as_str() == CATALOG)
            .times(1)
            .returning(move |_| Ok(recipes.clone()));

        let transport = Arc::new(MockTransport::serving(jpeg_response(4, 4)));
        let storage = Arc::new(MemoryStorage::new());
        let images = image_cache(transport.clone(), storage.clone()).await;
        let use_case = LoadRecipesUseCase::new(Arc::new(source), images);

        let batch = use_case.execute(&url(CATALOG)).await.unwrap();

        assert_eq!(batch.recipes.len(), 3);
        assert_eq!(batch.prefetch.downloaded, 2);
        assert_eq!(batch.prefetch.total(), 2);
        assert_eq!(transport.call_count(), 2);
        assert_eq!(storage.file_count(), 2);
    }

    #[tokio::test]
    async fn test_prefetch_counts_every_outcome() {
        let transport = Arc::new(MockTransport::serving(jpeg_response(2, 2)));
        transport.route(
            "https://example.com/broken/small.jpg",
            FetchedResource::new(
                Bytes::from_static(b"<html></html>"),
                ResponseMetadata::new(200, Some("text/html".to_string())),
            ),
        );
        transport.route_error(
            "https://example.com/offline/small.jpg",
            TransportError::timeout("https://example.com/offline/small.jpg"),
        );
        let storage = Arc::new(MemoryStorage::new());
        let images = image_cache(transport.clone(), storage.clone()).await;

        let cached = url("https://example.com/cached/small.jpg");
        storage.insert(
            images.resolve_path(&cached, None),
            encoded_image(ImageFormat::Jpeg, 2, 2),
        );

        let use_case = LoadRecipesUseCase::new(Arc::new(MockRecipeSource::new()), images)
            .with_prefetch_concurrency(2);
        let recipes = vec![
            recipe("Cached", Some(cached.as_str())),
            recipe("Fresh", Some("https://example.com/fresh/small.jpg")),
            recipe("Broken", Some("https://example.com/broken/small.jpg")),
            recipe("Offline", Some("https://example.com/offline/small.jpg")),
        ];

        let summary = use_case.prefetch_thumbnails(&recipes).await;

        assert_eq!(
            summary,
            PrefetchSummary {
                cached: 1,
                downloaded: 1,
                unavailable: 1,
                failed: 1,
            }
        );
        assert_eq!(transport.calls_for(cached.as_str()), 0);
    }

    #[tokio::test]
    async fn test_execute_propagates_catalog_error() {
        let mut source = MockRecipeSource::new();
        source
            .expect_fetch_recipes()
            .returning(|_| Err(CatalogError::InvalidResponse { status: 500 }));

        let transport = Arc::new(MockTransport::new());
        let images = image_cache(transport.clone(), Arc::new(MemoryStorage::new())).await;
        let use_case = LoadRecipesUseCase::new(Arc::new(source), images);

        let result = use_case.execute(&url(CATALOG)).await;

        assert!(matches!(
            result,
            Err(CatalogError::InvalidResponse { status: 500 })
        ));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_image_for_missing_url() {
        let transport = Arc::new(MockTransport::serving(jpeg_response(2, 2)));
        let images = image_cache(transport.clone(), Arc::new(MemoryStorage::new())).await;
        let use_case = LoadRecipesUseCase::new(Arc::new(MockRecipeSource::new()), images);

        assert!(use_case.image_for(None).await.is_none());
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_image_for_swallows_errors() {
        let transport = Arc::new(MockTransport::failing(TransportError::connect(
            "https://example.com/large.jpg",
            "unreachable",
        )));
        let images = image_cache(transport, Arc::new(MemoryStorage::new())).await;
        let use_case = LoadRecipesUseCase::new(Arc::new(MockRecipeSource::new()), images);

        let image = use_case
            .image_for(Some(&url("https://example.com/large.jpg")))
            .await;

        assert!(image.is_none());
    }

    #[tokio::test]
    async fn test_image_for_returns_downloaded_image() {
        let transport = Arc::new(MockTransport::serving(jpeg_response(9, 5)));
        let images = image_cache(transport, Arc::new(MemoryStorage::new())).await;
        let use_case = LoadRecipesUseCase::new(Arc::new(MockRecipeSource::new()), images);
        let large = url("https://example.com/large.jpg");

        let image = use_case.image_for(Some(&large)).await.unwrap();

        assert_eq!(image.dimensions(), (9, 5));
        assert_eq!(image.path(), use_case.cache_path_for(&large).as_path());
    }

    #[tokio::test]
    async fn test_clear_images_empties_cache() {
        let transport = Arc::new(MockTransport::serving(jpeg_response(2, 2)));
        let storage = Arc::new(MemoryStorage::new());
        let images = image_cache(transport, storage.clone()).await;
        let use_case = LoadRecipesUseCase::new(Arc::new(MockRecipeSource::new()), images);
        use_case
            .image_for(Some(&url("https://example.com/a.jpg")))
            .await
            .unwrap();
        assert_eq!(storage.file_count(), 1);

        use_case.clear_images().await;

        assert_eq!(storage.file_count(), 0);
    }
}
