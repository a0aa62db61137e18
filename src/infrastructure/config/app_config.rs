//! Application configuration.

use std::fmt;
use std::path::PathBuf;

use super::args::CliArgs;

/// Posts fetched per run in debug mode.
const DEBUG_FETCH_LIMIT: u32 = 100;
/// Posts fetched per run in production mode.
const FETCH_LIMIT: u32 = 1000;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Credentials for the feed API.
#[derive(Clone)]
pub struct FeedCredentials {
    /// OAuth2 client id.
    pub client_id: String,
    /// OAuth2 client secret.
    pub client_secret: String,
}

// keep the secret out of debug output
impl fmt::Debug for FeedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Application configuration assembled from CLI arguments and environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Feed API credentials.
    pub credentials: FeedCredentials,
    /// Redis URL for the media cache.
    pub redis_url: String,
    /// Debug mode flag.
    pub debug: bool,
    /// Log verbosity level.
    pub log_level: LogLevel,
    /// Log file path.
    pub log_path: Option<PathBuf>,
    /// Health-check mode flag.
    pub check: bool,
}

impl AppConfig {
    /// Builds the configuration from parsed CLI arguments.
    #[must_use]
    pub fn from_args(args: CliArgs) -> Self {
        Self {
            credentials: FeedCredentials {
                client_id: args.client_id,
                client_secret: args.client_secret,
            },
            redis_url: args.redis_url,
            debug: args.debug,
            log_level: args.log_level.unwrap_or_default(),
            log_path: args.log_path,
            check: args.check,
        }
    }

    /// Number of posts to fetch in the current mode.
    #[must_use]
    pub const fn fetch_limit(&self) -> u32 {
        if self.debug { DEBUG_FETCH_LIMIT } else { FETCH_LIMIT }
    }
}
