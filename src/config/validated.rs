//! Validated client configuration.
//!
//! All validation happens during construction, so a [`ClientConfig`]
//! always holds a usable base URL and an API key that is a legal header
//! value.

use std::fmt;
use std::path::Path;

use http::HeaderValue;
use url::Url;

use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Immutable connection settings for a [`WebhookClient`](crate::WebhookClient).
///
/// `Debug` and `Display` never print the API key.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    api_key: String,
    authorization: HeaderValue,
    default_project: Option<String>,
}

impl fmt::Display for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ url: {}, api_key: <redacted>, default_project: {} }}",
            self.base_url,
            self.default_project.as_deref().unwrap_or("none"),
        )
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("default_project", &self.default_project)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a configuration from a base URL and API key.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The URL does not parse or is not `http`/`https`
    /// - The API key is empty or contains characters not allowed in a header
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(base_url)?;
        let api_key = api_key.into();
        let authorization = authorization_value(&api_key)?;

        Ok(Self {
            base_url,
            api_key,
            authorization,
            default_project: None,
        })
    }

    /// Records a default project.
    ///
    /// Kept for interface stability with older callers; every request
    /// names its project explicitly and this value is never used for one.
    #[must_use]
    pub fn with_default_project(mut self, project_id: impl Into<String>) -> Self {
        self.default_project = Some(project_id.into());
        self
    }

    /// Builds a configuration from a parsed TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if `convoy.url` or `convoy.api_key` is missing or
    /// fails the same checks as [`ClientConfig::new`].
    pub fn from_toml(toml: &TomlConfig) -> Result<Self, ConfigError> {
        let section = &toml.convoy;

        let url = section
            .url
            .as_deref()
            .ok_or_else(|| ConfigError::missing(field::URL, "Set convoy.url in config file"))?;
        let api_key = section.api_key.as_deref().ok_or_else(|| {
            ConfigError::missing(field::API_KEY, "Set convoy.api_key in config file")
        })?;

        let config = Self::new(url, api_key)?;
        Ok(match &section.default_project {
            Some(project) => config.with_default_project(project.clone()),
            None => config,
        })
    }

    /// Parses a TOML document and builds a configuration from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or the settings are incomplete.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::from_toml(&TomlConfig::parse(content)?)
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml(&TomlConfig::load(path)?)
    }

    /// Returns the base URL requests are built on.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the legacy default project, if one was given.
    #[must_use]
    pub fn default_project(&self) -> Option<&str> {
        self.default_project.as_deref()
    }

    /// Returns the `Authorization: Bearer <key>` header value.
    #[must_use]
    pub const fn authorization(&self) -> &HeaderValue {
        &self.authorization
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}', expected http or https", url.scheme()),
        });
    }

    Ok(url)
}

/// Builds the bearer header value, marked sensitive so `http` hides it in debug output.
fn authorization_value(api_key: &str) -> Result<HeaderValue, ConfigError> {
    if api_key.trim().is_empty() {
        return Err(ConfigError::missing(
            field::API_KEY,
            "Provide the API key issued by the webhook service",
        ));
    }

    let mut value = HeaderValue::try_from(format!("Bearer {api_key}")).map_err(|e| {
        ConfigError::InvalidApiKey {
            reason: e.to_string(),
        }
    })?;
    value.set_sensitive(true);
    Ok(value)
}
