//! Remote fetch port definition.

use async_trait::async_trait;
use url::Url;

use crate::domain::entities::FetchedResource;
use crate::domain::errors::TransportError;

/// Port for single-shot HTTP GET requests.
///
/// Implementations do not retry and do not validate the status code; the
/// status is reported in the returned metadata.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Downloads the full body at `url`.
    async fn get(&self, url: &Url) -> Result<FetchedResource, TransportError>;
}
