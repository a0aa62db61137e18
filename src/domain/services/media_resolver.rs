//! Resolves feed posts to displayable media URLs.

use crate::domain::entities::{FeedPost, MediaItem, MediaUrl, PostPreview};

const IMGUR_HOST: &str = "imgur.com";
const ALBUM_MARKER: &str = "/a/";
const IMAGE_EXTENSIONS: [&str; 3] = [".jpg", ".png", ".jpeg"];

/// Maps a feed post to zero-or-one displayable media reference.
///
/// Only two hosting shapes are handled: imgur links and direct-hosted images
/// that carry preview metadata. Everything else resolves to nothing; absence
/// is the only signal, no error is raised for unmatched or malformed URLs.
pub struct MediaResolver;

impl MediaResolver {
    /// Resolves a post, or `None` when it carries no displayable media.
    #[must_use]
    pub fn resolve(post: &FeedPost) -> Option<MediaItem> {
        let media = Self::resolve_url(post.url(), post.preview())?;
        Some(MediaItem::new(post.title(), post.permalink(), media))
    }

    fn resolve_url(url: &str, preview: Option<&PostPreview>) -> Option<MediaUrl> {
        let is_imgur = url.contains(IMGUR_HOST);

        if is_imgur && url.ends_with(".gifv") {
            // dropping only the "v" serves the gif page; the mp4 rendition is
            // the playable one, so swap the whole extension
            let stem = &url[..url.len() - 4];
            Some(MediaUrl::Video(format!("{stem}mp4")))
        } else if !is_imgur && IMAGE_EXTENSIONS.iter().any(|ext| url.ends_with(ext)) {
            // the source image is often oversized; only posts with rendered
            // previews are usable
            Self::largest_resolution(preview?).map(MediaUrl::Image)
        } else if is_imgur && !url.contains(ALBUM_MARKER) {
            Some(MediaUrl::Image(Self::imgur_huge_thumbnail(url)))
        } else {
            None
        }
    }

    /// Picks the widest rendition of the first preview image. Ties keep the
    /// first-seen maximum.
    fn largest_resolution(preview: &PostPreview) -> Option<String> {
        let image = preview.images.first()?;
        let mut max_width = 0;
        let mut best = None;
        for resolution in &image.resolutions {
            if max_width < resolution.width {
                max_width = resolution.width;
                best = Some(resolution.url.as_str());
            }
        }
        best.map(str::to_owned)
    }

    /// Builds the i.imgur.com URL for a single-image page.
    /// The `h` suffix requests imgur's 1024x1024 "Huge Thumbnail" rendition.
    fn imgur_huge_thumbnail(url: &str) -> String {
        let url = url.strip_suffix("/new").unwrap_or(url);
        let segment = url.rsplit('/').next().unwrap_or(url);
        let id = segment.rsplit_once('.').map_or(segment, |(stem, _)| stem);
        format!("http://i.imgur.com/{id}h.jpg")
    }
}
