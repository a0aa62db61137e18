//! Domain entity definitions.

mod feed_post;
mod media_collection;
mod media_item;

pub use feed_post::{FeedPost, PostPreview, PreviewImage, PreviewResolution};
pub use media_collection::MediaCollection;
pub use media_item::{MediaItem, MediaUrl};
