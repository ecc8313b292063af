//! Default values and fixed protocol constants.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Path segments every API resource lives under, before the project id.
pub const API_PREFIX: [&str; 3] = ["api", "v1", "projects"];

/// Per-request timeout in seconds for every call except event creation.
pub const REQUEST_TIMEOUT_SECS: u64 = 2;

/// Per-request timeout as Duration.
#[must_use]
pub const fn request_timeout() -> Duration {
    Duration::from_secs(REQUEST_TIMEOUT_SECS)
}
