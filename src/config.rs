//! Configuration management for the Hookify API client.
//!
//! This module provides:
//! - Type-safe connection settings (base URL, optional transport timeouts)
//! - Initial credentials (API key and/or bearer token)
//! - Builder pattern for easy setup
//! - Opt-in environment variable loading
//! - Configuration validation
//!
//! ## Usage
//!
//! ```rust
//! use hookify_rs::config::{Config, HttpConfig};
//! use hookify_rs::Result;
//!
//! fn example() -> Result<()> {
//!     // Local development server, no credentials
//!     let config = Config::default();
//!
//!     // Custom server with an API key and a request timeout
//!     let config = Config::builder()
//!         .http(HttpConfig::builder()
//!             .base_url("https://hookify-api.onrender.com")
//!             .request_timeout_secs(60)
//!             .build())
//!         .api_key("hk_example")
//!         .build();
//!     config.validate()?;
//!
//!     // Load from HOOKIFY_* environment variables
//!     let config = Config::from_env()?;
//!     Ok(())
//! }
//! ```

use crate::error::{HookifyError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Default base URL of a locally running Hookify API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Main configuration structure for the Hookify client.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client configuration
    pub http: HttpConfig,
    /// Credentials the client starts with
    pub credentials: CredentialsConfig,
}

/// HTTP client configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Base URL of the Hookify API (default: "http://localhost:8000")
    pub base_url: String,
    /// Whole-request timeout in seconds (default: none, left to the transport)
    pub request_timeout_secs: Option<u64>,
    /// Connection timeout in seconds (default: none, left to the transport)
    pub connect_timeout_secs: Option<u64>,
    /// User agent string for requests
    pub user_agent: String,
}

/// Initial credentials. A bearer token always wins over an API key.
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct CredentialsConfig {
    /// Long-lived key sent as `X-API-Key`
    pub api_key: Option<String>,
    /// Session token sent as `Authorization: Bearer`
    pub token: Option<String>,
}

// Credentials stay out of debug output.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
            connect_timeout_secs: None,
            user_agent: format!("hookify-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Creates a new configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Creates a default configuration pointing at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.http.base_url = base_url.into();
        config
    }

    /// Loads configuration from environment variables.
    ///
    /// Recognized: `HOOKIFY_BASE_URL`, `HOOKIFY_API_KEY`, `HOOKIFY_TOKEN`,
    /// `HOOKIFY_REQUEST_TIMEOUT`, `HOOKIFY_CONNECT_TIMEOUT`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("HOOKIFY_BASE_URL") {
            config.http.base_url = val;
        }

        if let Ok(val) = std::env::var("HOOKIFY_REQUEST_TIMEOUT") {
            config.http.request_timeout_secs = Some(val.parse().map_err(|_| {
                HookifyError::config_error("Invalid HOOKIFY_REQUEST_TIMEOUT value")
            })?);
        }

        if let Ok(val) = std::env::var("HOOKIFY_CONNECT_TIMEOUT") {
            config.http.connect_timeout_secs = Some(val.parse().map_err(|_| {
                HookifyError::config_error("Invalid HOOKIFY_CONNECT_TIMEOUT value")
            })?);
        }

        config.credentials.api_key = non_empty_var("HOOKIFY_API_KEY");
        config.credentials.token = non_empty_var("HOOKIFY_TOKEN");

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for consistency and constraints.
    pub fn validate(&self) -> Result<()> {
        if self.http.base_url.trim().is_empty() {
            return Err(HookifyError::config_error("base_url cannot be empty"));
        }

        let url = Url::parse(&self.http.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(HookifyError::config_error(format!(
                "base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.http.request_timeout_secs == Some(0) {
            return Err(HookifyError::config_error(
                "request_timeout_secs must be greater than 0",
            ));
        }

        if self.http.connect_timeout_secs == Some(0) {
            return Err(HookifyError::config_error(
                "connect_timeout_secs must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Parses the base URL with a trailing slash so endpoint paths join beneath it.
    pub fn base_url(&self) -> Result<Url> {
        let raw = self.http.base_url.trim();
        let normalized = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{raw}/")
        };
        Ok(Url::parse(&normalized)?)
    }

    /// Converts the request timeout to a Duration, if one is set.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.http.request_timeout_secs.map(Duration::from_secs)
    }

    /// Converts the connect timeout to a Duration, if one is set.
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.http.connect_timeout_secs.map(Duration::from_secs)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Builder for creating Config instances.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    http: Option<HttpConfig>,
    api_key: Option<String>,
    token: Option<String>,
}

impl ConfigBuilder {
    /// Sets the HTTP configuration.
    pub fn http(mut self, http: HttpConfig) -> Self {
        self.http = Some(http);
        self
    }

    /// Sets the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets an existing bearer token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Config {
        Config {
            http: self.http.unwrap_or_default(),
            credentials: CredentialsConfig {
                api_key: self.api_key,
                token: self.token,
            },
        }
    }
}

impl HttpConfig {
    /// Creates a new HTTP config builder.
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::default()
    }
}

/// Builder for HttpConfig.
#[derive(Debug, Default)]
pub struct HttpConfigBuilder {
    base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    connect_timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

impl HttpConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn request_timeout_secs(mut self, timeout: u64) -> Self {
        self.request_timeout_secs = Some(timeout);
        self
    }

    pub fn connect_timeout_secs(mut self, timeout: u64) -> Self {
        self.connect_timeout_secs = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> HttpConfig {
        let default = HttpConfig::default();
        HttpConfig {
            base_url: self.base_url.unwrap_or(default.base_url),
            request_timeout_secs: self.request_timeout_secs.or(default.request_timeout_secs),
            connect_timeout_secs: self.connect_timeout_secs.or(default.connect_timeout_secs),
            user_agent: self.user_agent.unwrap_or(default.user_agent),
        }
    }
}
