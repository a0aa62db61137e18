//! Displayable media item entity.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The resolved media reference carried by a [`MediaItem`].
///
/// A resolved item always holds exactly one of these; a post that resolves to
/// neither never becomes an item in the first place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaUrl {
    /// Direct image URL.
    Image(String),
    /// Direct video URL.
    Video(String),
}

impl MediaUrl {
    /// The underlying URL regardless of kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Image(url) | Self::Video(url) => url,
        }
    }
}

/// One displayable piece of media, destined for a slideshow slide.
///
/// Identity is the title alone: two items with equal titles compare and hash
/// equal even when their URLs differ. Immutable after construction.
#[derive(Debug, Clone)]
pub struct MediaItem {
    title: String,
    permalink: String,
    media: MediaUrl,
}

impl MediaItem {
    /// Creates an item from its parts.
    #[must_use]
    pub fn new(title: impl Into<String>, permalink: impl Into<String>, media: MediaUrl) -> Self {
        Self {
            title: title.into(),
            permalink: permalink.into(),
            media,
        }
    }

    /// Creates an image item.
    #[must_use]
    pub fn image(
        title: impl Into<String>,
        permalink: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::new(title, permalink, MediaUrl::Image(url.into()))
    }

    /// Creates a video item.
    #[must_use]
    pub fn video(
        title: impl Into<String>,
        permalink: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::new(title, permalink, MediaUrl::Video(url.into()))
    }

    /// Item title, also its identity key.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Permalink back to the source post. Informational only.
    #[must_use]
    pub fn permalink(&self) -> &str {
        &self.permalink
    }

    /// The resolved media reference.
    #[must_use]
    pub fn media(&self) -> &MediaUrl {
        &self.media
    }

    /// Image URL, if this item is an image.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        match &self.media {
            MediaUrl::Image(url) => Some(url),
            MediaUrl::Video(_) => None,
        }
    }

    /// Video URL, if this item is a video.
    #[must_use]
    pub fn video_url(&self) -> Option<&str> {
        match &self.media {
            MediaUrl::Video(url) => Some(url),
            MediaUrl::Image(_) => None,
        }
    }
}

impl PartialEq for MediaItem {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for MediaItem {}

impl std::hash::Hash for MediaItem {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.title.hash(state);
    }
}

/// Flat wire shape the display surface consumes.
#[derive(Serialize, Deserialize)]
struct MediaItemRepr {
    title: String,
    image_url: Option<String>,
    video_url: Option<String>,
    permalink: String,
}

impl Serialize for MediaItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = MediaItemRepr {
            title: self.title.clone(),
            image_url: self.image_url().map(str::to_owned),
            video_url: self.video_url().map(str::to_owned),
            permalink: self.permalink.clone(),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MediaItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MediaItemRepr::deserialize(deserializer)?;
        let media = match (repr.image_url, repr.video_url) {
            (Some(url), None) => MediaUrl::Image(url),
            (None, Some(url)) => MediaUrl::Video(url),
            (Some(_), Some(_)) => {
                return Err(D::Error::custom("media item carries both an image and a video url"));
            }
            (None, None) => {
                return Err(D::Error::custom("media item carries no media url"));
            }
        };
        Ok(Self {
            title: repr.title,
            permalink: repr.permalink,
            media,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_title_only() {
        let a = MediaItem::image("good boy", "/r/a/1", "https://i.redd.it/a.jpg");
        let b = MediaItem::video("good boy", "/r/b/2", "https://i.imgur.com/b.mp4");
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_is_title_only() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |item: &MediaItem| {
            let mut hasher = DefaultHasher::new();
            item.hash(&mut hasher);
            hasher.finish()
        };

        let a = MediaItem::image("good boy", "/r/a/1", "https://i.redd.it/a.jpg");
        let b = MediaItem::video("good boy", "/r/b/2", "https://i.imgur.com/b.mp4");
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn test_url_accessors_are_exclusive() {
        let image = MediaItem::image("a", "/r/a/1", "https://i.redd.it/a.jpg");
        assert_eq!(image.image_url(), Some("https://i.redd.it/a.jpg"));
        assert_eq!(image.video_url(), None);

        let video = MediaItem::video("b", "/r/b/2", "https://i.imgur.com/b.mp4");
        assert_eq!(video.video_url(), Some("https://i.imgur.com/b.mp4"));
        assert_eq!(video.image_url(), None);
    }

    #[test]
    fn test_serializes_flat() {
        let item = MediaItem::image("a", "/r/a/1", "https://i.redd.it/a.jpg");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["title"], "a");
        assert_eq!(json["image_url"], "https://i.redd.it/a.jpg");
        assert_eq!(json["video_url"], serde_json::Value::Null);
        assert_eq!(json["permalink"], "/r/a/1");
    }

    #[test]
    fn test_deserialize_rejects_both_urls() {
        let json = r#"{
            "title": "a",
            "image_url": "https://i.redd.it/a.jpg",
            "video_url": "https://i.imgur.com/a.mp4",
            "permalink": "/r/a/1"
        }"#;
        assert!(serde_json::from_str::<MediaItem>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_no_url() {
        let json = r#"{
            "title": "a",
            "image_url": null,
            "video_url": null,
            "permalink": "/r/a/1"
        }"#;
        assert!(serde_json::from_str::<MediaItem>(json).is_err());
    }

    #[test]
    fn test_round_trips_video() {
        let item = MediaItem::video("b", "/r/b/2", "https://i.imgur.com/b.mp4");
        let json = serde_json::to_string(&item).unwrap();
        let back: MediaItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.video_url(), Some("https://i.imgur.com/b.mp4"));
        assert_eq!(back.permalink(), "/r/b/2");
    }
}
