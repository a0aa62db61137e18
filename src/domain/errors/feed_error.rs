//! Feed client error types.

use thiserror::Error;

/// Errors surfaced by the feed client.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum FeedError {
    #[error("feed credentials rejected: {message}")]
    AuthRejected { message: String },

    #[error("feed access denied: {message}")]
    AccessDenied { message: String },

    #[error("rate limited by the feed API, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    #[error("network error during feed fetch: {message}")]
    NetworkError { message: String },

    #[error("feed API temporarily unavailable: {message}")]
    Unavailable { message: String },

    #[error("malformed feed response: {message}")]
    MalformedResponse { message: String },

    #[error("unexpected feed error: {message}")]
    Unexpected { message: String },
}

impl FeedError {
    /// Creates auth rejected error.
    #[must_use]
    pub fn auth_rejected(message: impl Into<String>) -> Self {
        Self::AuthRejected {
            message: message.into(),
        }
    }

    /// Creates access denied error.
    #[must_use]
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::AccessDenied {
            message: message.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Creates unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates malformed response error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether a later run could plausibly succeed without changes.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. }
                | Self::RateLimited { .. }
                | Self::Unavailable { .. }
        )
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::RateLimited { .. } | Self::Unavailable { .. }
        )
    }
}
