//! Error types and handling for the Hookify API client.
//!
//! Every client operation is a single HTTP request, so every failure falls into one of a
//! small number of buckets. The client never retries; the categories exist so callers can
//! decide what to do next.
//!
//! ## Error Categories
//!
//! - **Transport Errors**: Connection refused, DNS failure, transport timeout (no response)
//! - **Remote Errors**: The service answered with a non-2xx status, usually with a JSON body
//! - **Unexpected Responses**: 2xx status but a body that is not JSON or lacks a required field
//! - **Configuration Errors**: Invalid base URL or timeouts
//!
//! ## Usage
//!
//! ```rust
//! use hookify_rs::HookifyError;
//! use hookify_rs::error::ErrorSeverity;
//!
//! fn handle_error(error: HookifyError) {
//!     if let Some(payload) = error.remote_payload() {
//!         eprintln!("Remote error: {payload}");
//!         return;
//!     }
//!     match error.severity() {
//!         ErrorSeverity::Warning => eprintln!("Recoverable error: {error}"),
//!         ErrorSeverity::Error | ErrorSeverity::Critical => eprintln!("Error occurred: {error}"),
//!     }
//! }
//! ```

use serde_json::Value;
use std::fmt;

/// Result type alias for Hookify client operations.
pub type Result<T> = std::result::Result<T, HookifyError>;

/// Error type for Hookify client operations.
#[derive(Debug, thiserror::Error)]
pub enum HookifyError {
    /// No response was received (connection refused, DNS failure, timeout)
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Hookify API error [{status}]: {message}")]
    Api {
        status: u16,
        message: String,
        /// Remote JSON error body, when the service sent one
        payload: Option<Value>,
    },

    /// Success status, but the body could not be used
    #[error("Unexpected response [{status}]: {reason}")]
    UnexpectedResponse { status: u16, reason: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON processing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Generic errors for wrapping other error types
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl HookifyError {
    /// Creates a remote error from a status code and the raw response body.
    ///
    /// A JSON body is kept as the payload; FastAPI-style `{"detail": "..."}` bodies also
    /// supply the message. Anything else becomes the message verbatim.
    pub fn api_error(status: u16, body: &str) -> Self {
        let payload = serde_json::from_str::<Value>(body).ok();

        let message = payload
            .as_ref()
            .and_then(|p| p.get("detail"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| {
                reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        HookifyError::Api {
            status,
            message,
            payload,
        }
    }

    /// Creates an unexpected-response error.
    pub fn unexpected(status: u16, reason: impl Into<String>) -> Self {
        HookifyError::UnexpectedResponse {
            status,
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config_error(message: impl Into<String>) -> Self {
        HookifyError::Config {
            message: message.into(),
        }
    }

    /// HTTP status associated with the error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            HookifyError::Api { status, .. } | HookifyError::UnexpectedResponse { status, .. } => {
                Some(*status)
            }
            HookifyError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The remote error payload, when the service sent a JSON body.
    pub fn remote_payload(&self) -> Option<&Value> {
        match self {
            HookifyError::Api { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }

    /// The service signals an exhausted monthly quota with HTTP 429.
    pub fn is_quota_exceeded(&self) -> bool {
        self.status() == Some(429)
    }

    /// Missing, invalid, or expired credentials (or an inactive account).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Gets the severity level of the error for logging purposes.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HookifyError::Network(_) => ErrorSeverity::Warning,

            HookifyError::Api { status, .. } => match status {
                429 => ErrorSeverity::Warning,
                500..=599 => ErrorSeverity::Critical,
                _ => ErrorSeverity::Error,
            },

            HookifyError::Config { .. } | HookifyError::UrlParse(_) => ErrorSeverity::Critical,

            HookifyError::UnexpectedResponse { .. }
            | HookifyError::Json(_)
            | HookifyError::Internal(_) => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels for logging and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Transient or caller-recoverable conditions
    Warning,
    /// Standard errors that affect a specific operation
    Error,
    /// Misconfiguration or a failing service
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
