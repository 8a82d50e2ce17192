//! Application configuration.

pub mod app_config;
pub mod args;
pub mod store;

pub use app_config::{AppConfig, HttpConfig, LogLevel, project_dirs};
pub use args::CliArgs;
pub use store::{ConfigError, ConfigStore};
