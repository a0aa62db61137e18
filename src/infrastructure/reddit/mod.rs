//! Reddit feed API client.

mod client;
mod dto;

pub use client::RedditFeedClient;
