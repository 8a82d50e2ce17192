//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// HTTP transport.
pub mod http;
/// Image caching.
pub mod image;
/// Recipe catalog client.
pub mod recipes;

pub use config::{AppConfig, CliArgs, ConfigStore, HttpConfig, LogLevel};
pub use http::ReqwestTransport;
pub use image::{FsStorage, ImageCache};
pub use recipes::RecipeApiClient;
