//! Domain error types.

mod cache_error;
mod catalog_error;
mod transport_error;

pub use cache_error::{CacheError, CacheResult};
pub use catalog_error::CatalogError;
pub use transport_error::TransportError;
