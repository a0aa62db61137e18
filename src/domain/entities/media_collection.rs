//! Title-keyed collection of media items.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::media_item::MediaItem;

/// The full set of media collected in one run, keyed by item title.
///
/// Title collisions are resolved last-write-wins: inserting an item whose
/// title is already present replaces the existing item and hands it back to
/// the caller. A fresh collection fully replaces the previous cached value;
/// there is no merge between runs.
#[derive(Debug, Clone)]
pub struct MediaCollection {
    collected_at: DateTime<Utc>,
    items: HashMap<String, MediaItem>,
}

impl MediaCollection {
    /// Creates an empty collection stamped with the current time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            collected_at: Utc::now(),
            items: HashMap::new(),
        }
    }

    /// Inserts an item keyed by its title.
    ///
    /// Returns the displaced item when the title was already present
    /// (last write wins).
    pub fn insert(&mut self, item: MediaItem) -> Option<MediaItem> {
        self.items.insert(item.title().to_owned(), item)
    }

    /// Looks up an item by title.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&MediaItem> {
        self.items.get(title)
    }

    /// Number of items held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &MediaItem> {
        self.items.values()
    }

    /// When this collection was assembled.
    #[must_use]
    pub fn collected_at(&self) -> DateTime<Utc> {
        self.collected_at
    }
}

impl Default for MediaCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire shape: timestamp plus a flat item array, order unspecified.
#[derive(Serialize, Deserialize)]
struct MediaCollectionRepr {
    collected_at: DateTime<Utc>,
    items: Vec<MediaItem>,
}

impl Serialize for MediaCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = MediaCollectionRepr {
            collected_at: self.collected_at,
            items: self.items.values().cloned().collect(),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MediaCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MediaCollectionRepr::deserialize(deserializer)?;
        let mut collection = Self {
            collected_at: repr.collected_at,
            items: HashMap::with_capacity(repr.items.len()),
        };
        for item in repr.items {
            collection.insert(item);
        }
        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_dedups_by_title() {
        let mut collection = MediaCollection::new();
        collection.insert(MediaItem::image("pupper", "/r/a/1", "https://i.redd.it/a.jpg"));
        collection.insert(MediaItem::video("pupper", "/r/b/2", "https://i.imgur.com/b.mp4"));

        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_insert_returns_displaced_item() {
        let mut collection = MediaCollection::new();
        let first = MediaItem::image("pupper", "/r/a/1", "https://i.redd.it/a.jpg");
        assert!(collection.insert(first).is_none());

        let second = MediaItem::video("pupper", "/r/b/2", "https://i.imgur.com/b.mp4");
        let displaced = collection.insert(second).expect("first item displaced");
        assert_eq!(displaced.image_url(), Some("https://i.redd.it/a.jpg"));

        // last write wins
        let survivor = collection.get("pupper").unwrap();
        assert_eq!(survivor.video_url(), Some("https://i.imgur.com/b.mp4"));
    }

    #[test]
    fn test_distinct_titles_accumulate() {
        let mut collection = MediaCollection::new();
        collection.insert(MediaItem::image("a", "/r/a/1", "https://i.redd.it/a.jpg"));
        collection.insert(MediaItem::image("b", "/r/b/2", "https://i.redd.it/b.jpg"));
        assert_eq!(collection.len(), 2);
        assert!(!collection.is_empty());
    }

    #[test]
    fn test_serializes_timestamp_and_items() {
        let mut collection = MediaCollection::new();
        collection.insert(MediaItem::image("a", "/r/a/1", "https://i.redd.it/a.jpg"));

        let json = serde_json::to_value(&collection).unwrap();
        assert!(json["collected_at"].is_string());
        assert_eq!(json["items"].as_array().unwrap().len(), 1);
        assert_eq!(json["items"][0]["title"], "a");
    }

    #[test]
    fn test_deserialize_applies_last_write_wins() {
        let json = r#"{
            "collected_at": "2019-07-14T12:00:00Z",
            "items": [
                {"title": "a", "image_url": "https://i.redd.it/1.jpg", "video_url": null, "permalink": "/r/a/1"},
                {"title": "a", "image_url": "https://i.redd.it/2.jpg", "video_url": null, "permalink": "/r/a/2"}
            ]
        }"#;
        let collection: MediaCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(
            collection.get("a").unwrap().image_url(),
            Some("https://i.redd.it/2.jpg")
        );
    }
}
