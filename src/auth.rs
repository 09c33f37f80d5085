//! Authentication modes and the headers they produce.

use crate::config::CredentialsConfig;
use crate::error::{HookifyError, Result};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};

/// Header carrying a long-lived API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// How a request authenticates itself.
///
/// Derived per request from the client's credentials, never stored. At most one
/// authorization header is ever produced.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Auth {
    /// No authorization header
    #[default]
    None,
    /// `X-API-Key: <key>`
    ApiKey(String),
    /// `Authorization: Bearer <token>`
    Bearer(String),
}

impl Auth {
    /// Selects the auth mode: a bearer token wins over an API key. Empty strings
    /// count as absent.
    pub fn resolve(token: Option<&str>, api_key: Option<&str>) -> Self {
        let token = token.filter(|t| !t.is_empty());
        let api_key = api_key.filter(|k| !k.is_empty());
        match (token, api_key) {
            (Some(token), _) => Auth::Bearer(token.to_string()),
            (None, Some(key)) => Auth::ApiKey(key.to_string()),
            (None, None) => Auth::None,
        }
    }

    /// Builds the header map for this mode.
    ///
    /// Fails when the credential is not a legal header value; the request is never
    /// sent without the header it was meant to carry.
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        match self {
            Auth::None => {}
            Auth::ApiKey(key) => {
                let value = sensitive_value(key, "API key")?;
                headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
            }
            Auth::Bearer(token) => {
                let value = sensitive_value(&format!("Bearer {token}"), "Bearer token")?;
                headers.insert(AUTHORIZATION, value);
            }
        }
        Ok(headers)
    }

    /// Short name for logs; never includes the credential.
    pub fn mode(&self) -> &'static str {
        match self {
            Auth::None => "none",
            Auth::ApiKey(_) => "api-key",
            Auth::Bearer(_) => "bearer",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Auth::None)
    }
}

fn sensitive_value(raw: &str, what: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(raw).map_err(|_| {
        HookifyError::config_error(format!("{what} is not a valid HTTP header value"))
    })?;
    value.set_sensitive(true);
    Ok(value)
}

impl From<&CredentialsConfig> for Auth {
    fn from(credentials: &CredentialsConfig) -> Self {
        Auth::resolve(credentials.token.as_deref(), credentials.api_key.as_deref())
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Auth::{}", self.mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_takes_precedence() {
        let auth = Auth::resolve(Some("jwt"), Some("hk_key"));
        assert_eq!(auth, Auth::Bearer("jwt".to_string()));

        let headers = auth.headers().unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer jwt");
        assert!(headers.get(API_KEY_HEADER).is_none());
    }

    #[test]
    fn test_api_key_only() {
        let auth = Auth::resolve(None, Some("hk_key"));
        let headers = auth.headers().unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("X-API-Key").unwrap(), "hk_key");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_no_credentials() {
        let auth = Auth::resolve(None, None);
        assert!(auth.is_none());
        assert!(auth.headers().unwrap().is_empty());
    }

    #[test]
    fn test_from_credentials_config() {
        let credentials = CredentialsConfig {
            api_key: Some("hk_key".to_string()),
            token: None,
        };
        assert_eq!(Auth::from(&credentials).mode(), "api-key");
    }

    #[test]
    fn test_debug_hides_credential() {
        let auth = Auth::Bearer("super-secret".to_string());
        let debug = format!("{auth:?}");
        assert_eq!(debug, "Auth::bearer");
    }

    #[test]
    fn test_empty_credentials_count_as_absent() {
        let auth = Auth::resolve(Some(""), Some("hk_key"));
        assert_eq!(auth, Auth::ApiKey("hk_key".to_string()));

        let headers = auth.headers().unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(API_KEY_HEADER).unwrap(), "hk_key");
        assert!(headers.get(AUTHORIZATION).is_none());

        assert!(Auth::resolve(Some(""), Some("")).is_none());
    }

    #[test]
    fn test_invalid_header_value_is_an_error() {
        let err = Auth::ApiKey("bad\nkey".to_string()).headers().unwrap_err();
        assert!(matches!(err, HookifyError::Config { .. }));
        assert!(!err.to_string().contains("bad"));

        let err = Auth::Bearer("bad\ntoken".to_string()).headers().unwrap_err();
        assert!(err.to_string().contains("Bearer token"));
    }
}
