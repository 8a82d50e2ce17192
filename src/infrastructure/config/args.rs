//! Command line arguments.

use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;
use url::Url;

/// Command line arguments. Each one overrides its config file value.
#[derive(Debug, Parser)]
#[command(
    name = "recipe-fetch",
    version,
    about = "Fetches the recipe catalog and warms the thumbnail cache",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Recipe catalog endpoint.
    #[arg(long, value_name = "URL")]
    pub catalog_url: Option<Url>,

    /// Image cache directory.
    #[arg(long, value_name = "PATH")]
    pub cache_dir: Option<PathBuf>,

    /// Maximum thumbnails fetched at once.
    #[arg(long)]
    pub prefetch_concurrency: Option<usize>,

    /// Clear the image cache and exit.
    #[arg(long)]
    pub clear_cache: bool,
}
