//! Configuration layer for the webhook service client.
//!
//! This module provides:
//! - Validated client settings ([`ClientConfig`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Default values and fixed protocol constants ([`defaults`])
//!
//! # Sources
//!
//! A [`ClientConfig`] is built either directly with [`ClientConfig::new`]
//! or from a TOML file with a `[convoy]` table. There is no environment
//! variable contract; callers that want one read the variables themselves.
//!
//! # Internal Tuning Parameters
//!
//! The per-request timeout is fixed at two seconds for every call except
//! event publishing, which has none and relies on the transport's defaults.
//! Neither is user-configurable.

pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;

pub use error::{ConfigError, field};
pub use toml::{ConvoySection, TomlConfig};
pub use validated::ClientConfig;
