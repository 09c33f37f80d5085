//! HTTP transport for the Hookify API.
//!
//! One method call maps to exactly one outbound request:
//! - Endpoint paths are joined onto the configured base URL
//! - Auth headers are attached from an [`Auth`] value chosen by the caller
//! - 2xx bodies are returned as opaque JSON
//! - Non-2xx responses become [`HookifyError::Api`] carrying the remote payload
//!
//! There is no retry loop; timeouts are only applied when configured.

use crate::auth::Auth;
use crate::config::Config;
use crate::error::{HookifyError, Result};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// HTTP client wrapper for Hookify API calls.
#[derive(Debug, Clone)]
pub struct HookifyHttpClient {
    client: Client,
    base_url: Url,
    config: Config,
}

impl HookifyHttpClient {
    /// Creates a client for the default local server.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Creates a new client with custom configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let base_url = config.base_url()?;

        let mut builder = Client::builder().user_agent(&config.http.user_agent);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolves an endpoint such as `/v2/generate/hook` against the base URL.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    /// Makes a GET request and returns the JSON body.
    pub async fn get_json(&self, endpoint: &str, auth: &Auth) -> Result<Value> {
        let request = self.request(Method::GET, endpoint, auth)?;
        self.execute(Method::GET, endpoint, request).await
    }

    /// Makes a POST request with a JSON body and returns the JSON response body.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        auth: &Auth,
        body: &T,
    ) -> Result<Value> {
        let request = self.request(Method::POST, endpoint, auth)?.json(body);
        self.execute(Method::POST, endpoint, request).await
    }

    fn request(&self, method: Method, endpoint: &str, auth: &Auth) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        debug!("{} {} (auth: {})", method, url.path(), auth.mode());
        let headers = auth.headers()?;
        Ok(self.client.request(method, url).headers(headers))
    }

    /// Sends the request once and classifies the outcome.
    async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<Value> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!("{method} {endpoint} -> {status}");

        if !status.is_success() {
            warn!("{method} {endpoint} failed with HTTP {status}");
            return Err(HookifyError::api_error(status.as_u16(), &body));
        }

        parse_body(status.as_u16(), &body)
    }
}

/// Parses a success body as JSON. An empty body is treated as `null`.
fn parse_body(status: u16, body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body)
        .map_err(|e| HookifyError::unexpected(status, format!("response is not valid JSON: {e}")))
}
