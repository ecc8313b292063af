//! Endpoint resources: read model, write model, and mutation responses.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// Pause status reported for an endpoint whose deliveries are on hold.
pub const STATUS_PAUSED: &str = "paused";

/// Response envelope for a single endpoint lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoint {
    /// Human-readable message from the service
    pub message: String,
    /// Whether the service considers the call successful
    pub status: bool,
    /// The endpoint itself
    #[serde(deserialize_with = "null_as_default")]
    pub data: EndpointData,
}

/// A webhook receiver registered under a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointData {
    /// Server-assigned identifier
    pub uid: String,
    pub name: String,
    /// Target URL deliveries are sent to
    pub url: String,
    pub description: String,
    /// Owning project
    pub project_id: String,
    pub owner_id: String,
    /// Pause status, e.g. `active`, `paused`, `inactive`
    pub status: String,
    pub is_disabled: bool,
    /// Number of events routed to this endpoint
    pub events: i64,
    /// Delivery timeout in seconds
    pub http_timeout: i64,
    /// Deliveries allowed per `rate_limit_duration` window
    pub rate_limit: i64,
    /// Rate limit window in seconds
    pub rate_limit_duration: i64,
    pub support_email: String,
    pub slack_webhook_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,
    /// Set once the endpoint has been soft-deleted
    pub deleted_at: Option<DateTime<Utc>>,
}

impl EndpointData {
    /// Returns true if the service reports the endpoint as paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.status == STATUS_PAUSED
    }

    /// Returns true if the endpoint carries a deletion timestamp.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Write-side projection of an endpoint, sent on create and update.
///
/// Every field is always serialized, matching what the service expects
/// from its own clients. `Debug` never prints [`secret`](Self::secret).
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpsertEndpointParams {
    pub name: String,
    /// Target URL deliveries are sent to
    pub url: String,
    pub advanced_signatures: bool,
    /// Owning application; deprecated by the service but still required
    #[serde(rename = "appID")]
    pub app_id: String,
    pub description: String,
    /// Delivery timeout in seconds
    pub http_timeout: i64,
    pub is_disabled: bool,
    pub owner_id: String,
    /// Deliveries allowed per `rate_limit_duration` window
    pub rate_limit: i64,
    /// Rate limit window in seconds
    pub rate_limit_duration: i64,
    /// Signing secret; write-only
    pub secret: String,
    pub slack_webhook_url: String,
    pub support_email: String,
}

impl UpsertEndpointParams {
    /// Creates parameters with a name and target URL, everything else defaulted.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Self::default()
        }
    }
}

impl fmt::Debug for UpsertEndpointParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = if self.secret.is_empty() {
            ""
        } else {
            "<redacted>"
        };

        f.debug_struct("UpsertEndpointParams")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("advanced_signatures", &self.advanced_signatures)
            .field("app_id", &self.app_id)
            .field("description", &self.description)
            .field("http_timeout", &self.http_timeout)
            .field("is_disabled", &self.is_disabled)
            .field("owner_id", &self.owner_id)
            .field("rate_limit", &self.rate_limit)
            .field("rate_limit_duration", &self.rate_limit_duration)
            .field("secret", &secret)
            .field("slack_webhook_url", &self.slack_webhook_url)
            .field("support_email", &self.support_email)
            .finish()
    }
}

/// Response to an endpoint creation request.
///
/// A `400` reply from the service also decodes into this shape; check
/// [`status`](Self::status) and [`message`](Self::message) for the outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateEndpointResponse {
    pub status: bool,
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: CreatedEndpoint,
}

/// Identifier and initial status of a newly created endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedEndpoint {
    pub uid: String,
    pub status: String,
}

/// Generic acknowledgement returned by update and delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointResponse {
    pub status: bool,
    pub message: String,
}

/// Body returned by the pause toggle; only the nested status is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointToggleStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub data: ToggleStatusData,
}

/// Nested payload of [`EndpointToggleStatus`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleStatusData {
    pub status: String,
}
