//! Media store error types.

use thiserror::Error;

/// Errors surfaced by the media store.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum StoreError {
    #[error("failed to connect to the media store: {message}")]
    ConnectionFailed { message: String },

    #[error("failed to serialize collection for storage: {message}")]
    SerializationFailed { message: String },

    #[error("failed to write collection to the media store: {message}")]
    WriteFailed { message: String },
}

impl StoreError {
    /// Creates connection failed error.
    #[must_use]
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::ConnectionFailed {
            message: message.into(),
        }
    }

    /// Creates serialization failed error.
    #[must_use]
    pub fn serialization_failed(message: impl Into<String>) -> Self {
        Self::SerializationFailed {
            message: message.into(),
        }
    }

    /// Creates write failed error.
    #[must_use]
    pub fn write_failed(message: impl Into<String>) -> Self {
        Self::WriteFailed {
            message: message.into(),
        }
    }

    /// Returns whether a later run could plausibly succeed without changes.
    /// Serialization failures are deterministic and never recoverable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::ConnectionFailed { .. } | Self::WriteFailed { .. })
    }
}
