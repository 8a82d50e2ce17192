use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use recipe_fetch::application::LoadRecipesUseCase;
use recipe_fetch::domain::ports::Transport;
use recipe_fetch::infrastructure::{
    AppConfig, CliArgs, ConfigStore, FsStorage, ImageCache, RecipeApiClient, ReqwestTransport,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(fmt::layer().with_target(false))
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let mut config = ConfigStore::locate(args.config.as_deref())?.load()?;
    config.merge_with_args(args);
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config = load_config(&args)?;
    init_logging(&config)?;

    info!(version = recipe_fetch::VERSION, "Starting {}", recipe_fetch::NAME);

    let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::from_config(&config.http)?);
    let images = Arc::new(
        ImageCache::open(
            config.effective_cache_dir(),
            Arc::new(FsStorage::new()),
            transport.clone(),
        )
        .await?,
    );

    let use_case = LoadRecipesUseCase::new(Arc::new(RecipeApiClient::new(transport)), images)
        .with_prefetch_concurrency(config.prefetch_concurrency);

    if args.clear_cache {
        use_case.clear_images().await;
        return Ok(());
    }

    let batch = use_case.execute(&config.catalog_url).await?;
    if batch.is_empty() {
        info!("No recipes available");
    }
    for recipe in &batch.recipes {
        let path = recipe
            .photo_url_small
            .as_ref()
            .map(|url| use_case.cache_path_for(url).display().to_string())
            .unwrap_or_default();
        info!(cuisine = %recipe.cuisine, name = %recipe.name, thumbnail = %path, "Recipe");
    }

    Ok(())
}
