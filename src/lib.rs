//! Convoy client: a typed async client for the Convoy webhook delivery service.
//!
//! Manages endpoints (webhook receivers), publishes events to them, and
//! reads back delivery history. Every operation is one authenticated
//! JSON-over-HTTP request against the configured base URL.
//!
//! ```no_run
//! use convoy_client::{ClientConfig, WebhookClient};
//! use convoy_client::model::Webhook;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = WebhookClient::new(ClientConfig::new("https://convoy.example.com", "api-key")?);
//!
//! let event = Webhook::new("endpoint-id", "order.created", json!({ "order": 42 }));
//! client.create_event("project-id", Some(&event)).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod model;
pub mod transport;

pub use client::{ClientError, WebhookClient};
pub use config::{ClientConfig, ConfigError};
