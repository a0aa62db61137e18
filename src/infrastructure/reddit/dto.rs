use serde::Deserialize;

use crate::domain::entities::{FeedPost, PostPreview, PreviewImage, PreviewResolution};

/// OAuth2 access token response.
#[derive(Debug, Deserialize)]
pub struct AccessTokenResponse {
    /// Bearer token for subsequent API calls.
    pub access_token: String,
    /// Seconds until the token expires.
    pub expires_in: u64,
}

/// Reddit API error response structure.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Error message from Reddit.
    pub message: String,
}

/// Listing envelope (`kind: "Listing"`).
#[derive(Debug, Deserialize)]
pub struct ListingEnvelope {
    /// Listing payload.
    pub data: ListingData,
}

/// One page of a listing.
#[derive(Debug, Deserialize)]
pub struct ListingData {
    /// Cursor for the next page, `None` when the listing is exhausted.
    pub after: Option<String>,
    /// Posts on this page.
    #[serde(default)]
    pub children: Vec<ThingEnvelope>,
}

/// Envelope around a single post (`kind: "t3"`).
#[derive(Debug, Deserialize)]
pub struct ThingEnvelope {
    /// Post payload.
    pub data: PostData,
}

/// Post record, restricted to the fields the pipeline reads.
#[derive(Debug, Deserialize)]
pub struct PostData {
    /// Post title.
    pub title: String,
    /// Outbound link; self posts link back to the post itself.
    #[serde(default)]
    pub url: String,
    /// Permalink path on the feed.
    pub permalink: String,
    /// Preview metadata, absent when Reddit rendered no previews.
    pub preview: Option<PreviewData>,
}

/// Preview block of a post.
#[derive(Debug, Deserialize)]
pub struct PreviewData {
    /// Preview images, primary image first.
    #[serde(default)]
    pub images: Vec<PreviewImageData>,
}

/// One preview image.
#[derive(Debug, Deserialize)]
pub struct PreviewImageData {
    /// Pre-rendered resolutions, smallest first.
    #[serde(default)]
    pub resolutions: Vec<ResolutionData>,
}

/// One pre-rendered resolution.
#[derive(Debug, Deserialize)]
pub struct ResolutionData {
    /// Rendition URL.
    pub url: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl From<PostData> for FeedPost {
    fn from(data: PostData) -> Self {
        let post = Self::new(data.title, data.url, data.permalink);
        match data.preview {
            Some(preview) => post.with_preview(preview.into()),
            None => post,
        }
    }
}

impl From<PreviewData> for PostPreview {
    fn from(data: PreviewData) -> Self {
        Self {
            images: data.images.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<PreviewImageData> for PreviewImage {
    fn from(data: PreviewImageData) -> Self {
        Self {
            resolutions: data
                .resolutions
                .into_iter()
                .map(|r| PreviewResolution {
                    url: r.url,
                    width: r.width,
                    height: r.height,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_JSON: &str = r#"{
        "kind": "Listing",
        "data": {
            "after": "t3_cdefgh",
            "children": [
                {
                    "kind": "t3",
                    "data": {
                        "title": "He does a big stretch",
                        "url": "https://i.redd.it/f52s327v59c31.jpg",
                        "permalink": "/r/heckingoodboys/comments/cabc12/he_does_a_big_stretch/",
                        "preview": {
                            "enabled": true,
                            "images": [
                                {
                                    "source": {"url": "https://i.redd.it/f52s327v59c31.jpg", "width": 4032, "height": 3024},
                                    "resolutions": [
                                        {"url": "https://preview.redd.it/s?width=108", "width": 108, "height": 81},
                                        {"url": "https://preview.redd.it/s?width=640", "width": 640, "height": 480}
                                    ]
                                }
                            ]
                        }
                    }
                },
                {
                    "kind": "t3",
                    "data": {
                        "title": "Borking at the mailman",
                        "url": "https://i.imgur.com/abc123.gifv",
                        "permalink": "/r/heckingoodboys/comments/cdef34/borking_at_the_mailman/",
                        "score": 1234
                    }
                }
            ]
        }
    }"#;

    #[test]
    fn test_parses_listing_page() {
        let listing: ListingEnvelope = serde_json::from_str(LISTING_JSON).unwrap();

        assert_eq!(listing.data.after.as_deref(), Some("t3_cdefgh"));
        assert_eq!(listing.data.children.len(), 2);

        let first = &listing.data.children[0].data;
        assert_eq!(first.title, "He does a big stretch");
        let preview = first.preview.as_ref().unwrap();
        assert_eq!(preview.images[0].resolutions.len(), 2);
        assert_eq!(preview.images[0].resolutions[1].width, 640);

        // unknown fields like score are ignored
        let second = &listing.data.children[1].data;
        assert!(second.preview.is_none());
    }

    #[test]
    fn test_maps_post_to_feed_post() {
        let listing: ListingEnvelope = serde_json::from_str(LISTING_JSON).unwrap();
        let post: FeedPost = listing.data.children.into_iter().next().unwrap().data.into();

        assert_eq!(post.title(), "He does a big stretch");
        assert_eq!(post.url(), "https://i.redd.it/f52s327v59c31.jpg");
        let preview = post.preview().unwrap();
        assert_eq!(preview.images[0].resolutions[0].width, 108);
    }

    #[test]
    fn test_parses_exhausted_listing() {
        let json = r#"{"kind": "Listing", "data": {"after": null, "children": []}}"#;
        let listing: ListingEnvelope = serde_json::from_str(json).unwrap();
        assert!(listing.data.after.is_none());
        assert!(listing.data.children.is_empty());
    }

    #[test]
    fn test_parses_access_token_response() {
        let json = r#"{"access_token": "abc-123", "token_type": "bearer", "expires_in": 3600, "scope": "*"}"#;
        let token: AccessTokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "abc-123");
        assert_eq!(token.expires_in, 3600);
    }
}
