//! Infrastructure layer with external service adapters.

/// Media cache store adapter.
pub mod cache;
/// Application configuration.
pub mod config;
/// Reddit feed API client.
pub mod reddit;

pub use cache::RedisMediaStore;
pub use config::{AppConfig, CliArgs, FeedCredentials, LogLevel};
pub use reddit::RedditFeedClient;
