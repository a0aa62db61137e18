//! goodboys - collects displayable media from a curated Reddit feed.
//!
//! This crate fetches hot posts from a curated multireddit, resolves each
//! post to a displayable image or video URL, dedups the result by title and
//! writes the collection to a Redis cache for a slideshow display surface.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, services and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "goodboys";
