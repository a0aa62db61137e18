//! Reddit feed API HTTP client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::dto::{AccessTokenResponse, ErrorResponse, ListingData, ListingEnvelope};
use crate::domain::entities::FeedPost;
use crate::domain::errors::FeedError;
use crate::domain::ports::FeedPort;
use crate::infrastructure::config::FeedCredentials;

const REDDIT_API_BASE: &str = "https://oauth.reddit.com";
const REDDIT_AUTH_BASE: &str = "https://www.reddit.com";
const USER_AGENT: &str = "goodboys/0.1 (curated feed media collector)";

/// Multireddit the collector reads from.
const FEED_USER: &str = "heckingoodboys";
const FEED_NAME: &str = "heckingoodboys";

/// Most children Reddit returns in a single listing page.
const PAGE_SIZE: u32 = 100;

/// Reddit feed API client.
///
/// Authenticates with the OAuth2 client-credentials grant once per run and
/// pages through the multireddit's hot listing with the `after` cursor until
/// the requested limit is reached.
pub struct RedditFeedClient {
    client: Client,
    api_base: String,
    auth_base: String,
    credentials: FeedCredentials,
}

impl RedditFeedClient {
    /// Creates new client with default base URLs.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(credentials: FeedCredentials) -> Result<Self, FeedError> {
        Self::with_base_urls(credentials, REDDIT_API_BASE, REDDIT_AUTH_BASE)
    }

    /// Creates client with custom API and auth base URLs.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_urls(
        credentials: FeedCredentials,
        api_base: impl Into<String>,
        auth_base: impl Into<String>,
    ) -> Result<Self, FeedError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| FeedError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base: api_base.into(),
            auth_base: auth_base.into(),
            credentials,
        })
    }

    async fn request_token(&self) -> Result<String, FeedError> {
        let url = format!("{}/api/v1/access_token", self.auth_base);

        debug!("Requesting feed API access token");

        let response = self
            .client
            .post(&url)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();

        if !status.is_success() {
            return Err(self.handle_error_response(status, response).await);
        }

        let token: AccessTokenResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse access token response");
            FeedError::malformed(format!("failed to parse token response: {e}"))
        })?;

        debug!(expires_in = token.expires_in, "Access token granted");

        Ok(token.access_token)
    }

    async fn fetch_page(
        &self,
        token: &str,
        limit: u32,
        after: Option<&str>,
    ) -> Result<ListingData, FeedError> {
        let url = format!("{}/user/{FEED_USER}/m/{FEED_NAME}/hot", self.api_base);

        // raw_json=1 keeps preview URLs unescaped
        let mut query: Vec<(&str, String)> = vec![
            ("raw_json", "1".to_owned()),
            ("limit", limit.to_string()),
        ];
        if let Some(after) = after {
            query.push(("after", after.to_owned()));
        }

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&query)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();

        if !status.is_success() {
            return Err(self.handle_error_response(status, response).await);
        }

        let listing: ListingEnvelope = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse listing response");
            FeedError::malformed(format!("failed to parse listing response: {e}"))
        })?;

        Ok(listing.data)
    }

    async fn handle_error_response(
        &self,
        status: StatusCode,
        response: reqwest::Response,
    ) -> FeedError {
        let error_message = match response.json::<ErrorResponse>().await {
            Ok(error) => error.message,
            Err(_) => format!("HTTP {status}"),
        };

        match status {
            StatusCode::UNAUTHORIZED => FeedError::auth_rejected("invalid client id or secret"),
            StatusCode::FORBIDDEN => {
                FeedError::access_denied(format!("access denied: {error_message}"))
            }
            StatusCode::TOO_MANY_REQUESTS => FeedError::RateLimited { retry_after_ms: 5000 },
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
                FeedError::unavailable("feed API is temporarily unavailable")
            }
            _ => FeedError::unexpected(format!(
                "unexpected response: {status} - {error_message}"
            )),
        }
    }
}

fn map_transport_error(e: reqwest::Error) -> FeedError {
    warn!(error = %e, "Failed to reach the feed API");
    if e.is_timeout() {
        FeedError::network("request timed out")
    } else if e.is_connect() {
        FeedError::network("failed to connect to the feed API")
    } else {
        FeedError::network(e.to_string())
    }
}

#[async_trait]
impl FeedPort for RedditFeedClient {
    async fn fetch_hot_posts(&self, limit: u32) -> Result<Vec<FeedPost>, FeedError> {
        let token = self.request_token().await?;

        let mut posts: Vec<FeedPost> = Vec::new();
        let mut after: Option<String> = None;

        while (posts.len() as u32) < limit {
            let remaining = limit - posts.len() as u32;
            let page = self
                .fetch_page(&token, PAGE_SIZE.min(remaining), after.as_deref())
                .await?;

            if page.children.is_empty() {
                break;
            }

            posts.extend(page.children.into_iter().map(|child| child.data.into()));

            after = page.after;
            if after.is_none() {
                // listing exhausted before the limit
                break;
            }
        }

        posts.truncate(limit as usize);

        debug!(count = posts.len(), limit, "Fetched hot posts");

        Ok(posts)
    }

    async fn health_check(&self) -> Result<(), FeedError> {
        debug!("Performing feed API health check");
        self.request_token().await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_credentials() -> FeedCredentials {
        FeedCredentials {
            client_id: "id".to_owned(),
            client_secret: "secret".to_owned(),
        }
    }

    #[test]
    fn test_client_creation() {
        let client = RedditFeedClient::new(make_credentials());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_custom_base_urls() {
        let client = RedditFeedClient::with_base_urls(
            make_credentials(),
            "http://127.0.0.1:8080",
            "http://127.0.0.1:8080",
        );
        assert!(client.is_ok());
    }
}
