//! Domain layer with core entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{CacheKey, FetchedResource, ImageSource, LoadedImage, Recipe, ResponseMetadata};
pub use errors::{CacheError, CacheResult, CatalogError, TransportError};
pub use ports::{RecipeSource, Storage, Transport};
