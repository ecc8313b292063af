//! Wire types for the webhook service's JSON API.
//!
//! Field names are the service's snake_case names and must not change.
//! Responses decode leniently: missing or `null` fields take their default
//! value and unknown fields are ignored.

mod delivery;
mod endpoint;
mod event;
mod nullable;

#[cfg(test)]
mod endpoint_tests;

pub use delivery::{
    DeliveryMetadata, EventDelivery, EventDeliveryContent, EventDeliveryPage, EventMetadata,
};
pub use endpoint::{
    CreateEndpointResponse, CreatedEndpoint, Endpoint, EndpointData, EndpointResponse,
    EndpointToggleStatus, STATUS_PAUSED, ToggleStatusData, UpsertEndpointParams,
};
pub use event::{Webhook, WebhookData};
