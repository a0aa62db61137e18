use std::path::PathBuf;

use clap::Parser;

use super::app_config::LogLevel;

/// Command-line arguments, most of them backed by environment variables so
/// the binary runs unattended under a scheduler.
#[derive(Debug, Parser)]
#[command(
    name = "goodboys",
    version,
    about = "Collects displayable media from a curated Reddit feed into a slideshow cache",
    long_about = None
)]
pub struct CliArgs {
    /// Feed API client id.
    #[arg(long, env = "REDDIT_CLIENT_ID", hide_env_values = true, value_name = "ID")]
    pub client_id: String,

    /// Feed API client secret.
    #[arg(long, env = "REDDIT_CLIENT_SECRET", hide_env_values = true, value_name = "SECRET")]
    pub client_secret: String,

    /// Redis URL for the media cache.
    #[arg(
        long,
        env = "REDIS_URL",
        default_value = "redis://127.0.0.1:6379",
        value_name = "URL"
    )]
    pub redis_url: String,

    /// Debug mode: fetch a reduced number of posts.
    #[arg(long, env = "GOODBOYS_DEBUG")]
    pub debug: bool,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Check feed API connectivity and credentials, then exit.
    #[arg(long)]
    pub check: bool,
}
