//! Locates and loads `config.toml`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use super::app_config::{AppConfig, project_dirs};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No platform config directory and no explicit path.
    #[error("no configuration directory available, pass --config")]
    NoConfigDir,

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that was read.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// The default file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File that was written.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// Defaults could not be rendered as TOML.
    #[error("failed to render default config: {0}")]
    Render(#[from] toml::ser::Error),
}

/// A resolved `config.toml` location.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Uses `path` when given, otherwise `config.toml` in the platform config
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if there is no override and the
    /// platform directory cannot be determined.
    pub fn locate(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => project_dirs()
                .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
                .ok_or(ConfigError::NoConfigDir)?,
        };
        Ok(Self { path })
    }

    /// Loads the configuration.
    ///
    /// A missing file is created with defaults. A malformed file is left
    /// untouched and defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the defaults
    /// cannot be written.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "Writing default config");
                let config = AppConfig::default();
                self.write_default(&config)?;
                return Ok(config);
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        toml::from_str(&content).or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "Ignoring malformed config");
            Ok(AppConfig::default())
        })
    }

    fn write_default(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let rendered = toml::to_string_pretty(config)?;
        let write_err = |source: std::io::Error| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(write_err)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(write_err)?;
        temp_file.write_all(rendered.as_bytes()).map_err(write_err)?;
        temp_file
            .persist(&self.path)
            .map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::LogLevel;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let store = ConfigStore::locate(Some(&path)).unwrap();

        let config = store.load().unwrap();

        assert_eq!(config.prefetch_concurrency, 6);
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("catalog_url"));
        let reparsed: AppConfig = toml::from_str(&written).unwrap();
        assert_eq!(reparsed.catalog_url, config.catalog_url);
    }

    #[test]
    fn test_malformed_file_is_left_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "invalid_toml = [").unwrap();

        let config = ConfigStore::locate(Some(&path)).unwrap().load().unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(fs::read_to_string(&path).unwrap(), "invalid_toml = [");
    }

    #[test]
    fn test_existing_file_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            "log_level = \"warn\"\ncache_dir = \"/tmp/images\"\nprefetch_concurrency = 1\n",
        )
        .unwrap();

        let config = ConfigStore::locate(Some(&path)).unwrap().load().unwrap();

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.cache_dir, Some(PathBuf::from("/tmp/images")));
        assert_eq!(config.prefetch_concurrency, 1);
    }

    #[test]
    fn test_unreadable_path_is_read_error() {
        let dir = tempdir().unwrap();

        let result = ConfigStore::locate(Some(dir.path())).unwrap().load();

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
