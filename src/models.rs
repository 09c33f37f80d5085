//! Typed views over Hookify response bodies.
//!
//! Client methods hand back the service's JSON untouched. These structs are an opt-in
//! way to read the fields callers usually care about; unknown fields are ignored and
//! fields the service may leave out are `Option`.

use crate::error::{HookifyError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Builds a typed view from an opaque response body.
///
/// A shape mismatch is reported as an unexpected response; the body came from a
/// successful call, hence status 200.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        HookifyError::unexpected(200, format!("response does not have the expected shape: {e}"))
    })
}

/// `POST /auth/login` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// `POST /v2/generate/hook` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HookResponse {
    pub hooks: Vec<String>,
    #[serde(default)]
    pub quota_remaining: Option<i64>,
}

/// `POST /v2/generate/caption` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaptionResponse {
    pub captions: Vec<String>,
    #[serde(default)]
    pub quota_remaining: Option<i64>,
}

/// `POST /v2/generate/hashtags` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HashtagResponse {
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub quota_remaining: Option<i64>,
}

/// Emotion analysis, either standalone or embedded in a complete generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmotionAnalysis {
    pub primary_emotion: String,
    /// 0.0 to 1.0
    pub confidence: f64,
    #[serde(default)]
    pub emotions_breakdown: HashMap<String, f64>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// `POST /v2/generate/complete` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompleteResponse {
    pub hooks: Vec<String>,
    pub captions: Vec<String>,
    pub hashtags: Vec<String>,
    /// Missing or `null` means no analysis is available
    #[serde(default)]
    pub emotion_analysis: Option<EmotionAnalysis>,
    pub quota_remaining: i64,
}

/// `GET /subscription/usage` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsageStats {
    pub current_plan: String,
    pub used_quota: i64,
    pub monthly_quota: i64,
    #[serde(default)]
    pub remaining_quota: Option<i64>,
    pub generations_this_month: i64,
}

impl UsageStats {
    /// Remaining quota as reported, or derived from monthly minus used.
    pub fn remaining(&self) -> i64 {
        self.remaining_quota
            .unwrap_or_else(|| (self.monthly_quota - self.used_quota).max(0))
    }
}
