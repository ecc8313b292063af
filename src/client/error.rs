//! Error types for client operations.

use thiserror::Error;

use crate::transport::{BodyError, HttpError};

/// Error type for a single client operation.
///
/// Every variant is terminal for the call that produced it; the client
/// never retries or falls back.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or no response arrived.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// A response arrived but its body could not be read.
    ///
    /// A body cut short by the request timeout is reported as
    /// [`HttpError::Timeout`] instead.
    #[error(transparent)]
    UnreadableBody(BodyError),

    /// The response status is outside the range the operation accepts.
    #[error("response code {} invalid", .status.as_u16())]
    BadStatus {
        /// Status returned by the service
        status: http::StatusCode,
    },

    /// The response body is not the JSON shape the operation expects.
    #[error("Malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// No event was passed to publish; nothing was sent.
    #[error("webhook data undefined")]
    UndefinedPayload,

    /// The request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A resource URL could not be built from the base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<BodyError> for ClientError {
    fn from(error: BodyError) -> Self {
        if error.is_timeout() {
            Self::Transport(HttpError::Timeout)
        } else {
            Self::UnreadableBody(error)
        }
    }
}

impl ClientError {
    /// Returns the rejected status code, if this is a status error.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::BadStatus { status } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the error was raised before any request was sent.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::UndefinedPayload | Self::Serialize(_) | Self::InvalidUrl(_)
        )
    }
}
