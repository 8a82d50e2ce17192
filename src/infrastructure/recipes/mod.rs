//! Recipe catalog client.

mod client;
mod dto;

pub use client::{DEFAULT_CATALOG_URL, EMPTY_CATALOG_URL, MALFORMED_CATALOG_URL, RecipeApiClient};
