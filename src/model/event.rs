//! Outbound events published to the service.

use serde::{Deserialize, Serialize};

/// An event to publish, plus extra headers for the publish request.
///
/// Only [`data`](Self::data) is sent as the request body. The headers are
/// copied onto the request before the client sets `Authorization` and
/// `Content-Type`, so those two can never be overridden from here.
#[derive(Debug, Clone, Default)]
pub struct Webhook {
    pub data: WebhookData,
    pub headers: http::HeaderMap,
}

impl Webhook {
    /// Creates an event for the given endpoint with no extra headers.
    #[must_use]
    pub fn new(
        endpoint_id: impl Into<String>,
        event_type: impl Into<String>,
        data: serde_json::Value,
    ) -> Self {
        Self {
            data: WebhookData {
                data,
                event_type: event_type.into(),
                endpoint_id: endpoint_id.into(),
            },
            headers: http::HeaderMap::new(),
        }
    }

    /// Appends an extra header value; repeated names keep every value.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// Wire body of a publish request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookData {
    /// Arbitrary JSON payload delivered to the endpoint
    pub data: serde_json::Value,
    /// Event type tag used for routing and filtering
    pub event_type: String,
    /// Target endpoint
    pub endpoint_id: String,
}
