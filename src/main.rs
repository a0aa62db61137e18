use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use goodboys::application::{CollectMediaUseCase, PopulateCacheUseCase};
use goodboys::domain::ports::FeedPort;
use goodboys::infrastructure::{AppConfig, CliArgs, RedditFeedClient, RedisMediaStore};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        // stdout carries the handler response; logs go to stderr
        let stderr_layer = fmt::layer().with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // a .env file is optional; absence is not an error
    dotenvy::dotenv().ok();

    let config = AppConfig::from_args(CliArgs::parse());

    init_logging(&config)?;

    info!(
        version = goodboys::VERSION,
        debug = config.debug,
        "Starting goodboys"
    );

    let feed_client = Arc::new(RedditFeedClient::new(config.credentials.clone())?);

    if config.check {
        feed_client.health_check().await?;
        println!("feed API reachable");
        return Ok(());
    }

    let media_store = Arc::new(RedisMediaStore::connect(&config.redis_url).await?);

    let collect = CollectMediaUseCase::new(feed_client, config.fetch_limit());
    let populate = PopulateCacheUseCase::new(collect, media_store);

    let response = populate.execute().await?;

    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}
