//! Error types for HTTP transport operations.

use thiserror::Error;

/// Error type for sending an HTTP request.
///
/// Describes what went wrong on the wire. The client never retries,
/// so every variant is terminal for the call that produced it.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS failures and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the per-request timeout.
    #[error("Request timed out")]
    Timeout,

    /// The request URL was rejected before sending.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// The response arrived but its body could not be read to the end.
///
/// Kept separate from [`HttpError`] because the status line is still
/// meaningful: some callers only need the status and treat the body
/// as diagnostic. A body cut short by the request timeout is flagged
/// so callers that do need the body can report it as a timeout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to read response body: {reason}")]
pub struct BodyError {
    reason: String,
    timed_out: bool,
}

impl BodyError {
    /// Creates a body read error with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            timed_out: false,
        }
    }

    /// Creates a body read error caused by the request timeout elapsing.
    #[must_use]
    pub fn timeout(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            timed_out: true,
        }
    }

    /// Returns true if the body stopped arriving before the timeout elapsed.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        self.timed_out
    }

    /// Returns the underlying reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
