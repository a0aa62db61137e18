//! Feed post entity as seen by the collection pipeline.

/// A single post fetched from the curated feed.
///
/// Carries only the fields the pipeline reads; everything else the feed
/// returns is dropped at the adapter boundary.
#[derive(Debug, Clone)]
pub struct FeedPost {
    title: String,
    url: String,
    permalink: String,
    preview: Option<PostPreview>,
}

impl FeedPost {
    /// Creates a post without preview metadata.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        permalink: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            permalink: permalink.into(),
            preview: None,
        }
    }

    /// Attaches preview metadata.
    #[must_use]
    pub fn with_preview(mut self, preview: PostPreview) -> Self {
        self.preview = Some(preview);
        self
    }

    /// Post title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Outbound link the post points at.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Permalink back to the post on the feed.
    #[must_use]
    pub fn permalink(&self) -> &str {
        &self.permalink
    }

    /// Preview metadata, absent for posts the feed did not render previews for.
    #[must_use]
    pub fn preview(&self) -> Option<&PostPreview> {
        self.preview.as_ref()
    }
}

/// Preview metadata attached to image posts.
#[derive(Debug, Clone, Default)]
pub struct PostPreview {
    /// Preview images; the feed puts the post's primary image first.
    pub images: Vec<PreviewImage>,
}

/// One preview image with its pre-rendered resolutions.
#[derive(Debug, Clone, Default)]
pub struct PreviewImage {
    /// Available renditions, smallest first as the feed sends them.
    pub resolutions: Vec<PreviewResolution>,
}

/// A single pre-rendered resolution of a preview image.
#[derive(Debug, Clone)]
pub struct PreviewResolution {
    /// URL of this rendition.
    pub url: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}
