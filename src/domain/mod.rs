//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Domain services.
pub mod services;

pub use entities::{FeedPost, MediaCollection, MediaItem, MediaUrl};
pub use errors::{FeedError, PipelineError, StoreError};
pub use ports::{FeedPort, MediaStorePort};
pub use services::MediaResolver;
