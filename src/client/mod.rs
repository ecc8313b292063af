//! Typed client for the webhook service's project-scoped REST API.
//!
//! This module provides:
//! - The client itself ([`WebhookClient`])
//! - Its error type ([`ClientError`])
//!
//! Each operation performs exactly one request. Which response statuses an
//! operation accepts differs between operations and mirrors what the
//! service returns; see [`WebhookClient`] for the table.

mod error;
mod status;
mod webhook;


pub use error::ClientError;
pub use webhook::WebhookClient;
