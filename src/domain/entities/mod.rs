//! Domain entities.

mod image;
mod recipe;
mod resource;

pub use image::{CacheKey, ImageSource, LoadedImage};
pub use recipe::Recipe;
pub use resource::{FetchedResource, ResponseMetadata};
