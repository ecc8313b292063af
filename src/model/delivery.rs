//! Delivery history for an endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// One page of delivery attempts, as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDelivery {
    pub message: String,
    pub status: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub data: EventDeliveryPage,
}

impl EventDelivery {
    /// Returns the deliveries on this page.
    #[must_use]
    pub fn deliveries(&self) -> &[EventDeliveryContent] {
        &self.data.content
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDeliveryPage {
    #[serde(deserialize_with = "null_as_default")]
    pub content: Vec<EventDeliveryContent>,
}

/// A single event delivery and its attempt counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDeliveryContent {
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    /// Delivery status, e.g. `Success`, `Retry`, `Failure`
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub event_metadata: EventMetadata,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: DeliveryMetadata,
}

impl EventDeliveryContent {
    /// Returns the event type tag of the delivered event.
    #[must_use]
    pub fn event_type(&self) -> &str {
        &self.event_metadata.event_type
    }

    /// Attempts left before the service gives up on this delivery, never negative.
    #[must_use]
    pub const fn attempts_remaining(&self) -> i64 {
        let remaining = self
            .metadata
            .retry_limit
            .saturating_sub(self.metadata.num_trials);
        if remaining < 0 { 0 } else { remaining }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventMetadata {
    pub event_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryMetadata {
    /// Attempts made so far
    pub num_trials: i64,
    /// Configured retry limit
    pub retry_limit: i64,
}
