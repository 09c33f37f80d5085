//! Trait abstraction over the Hookify API surface.
//!
//! [`HookifyApi`] mirrors the endpoints of [`HookifyClient`] so code that consumes
//! generation results (such as the [`summary`](crate::summary) reports) can be driven by
//! a fake in tests or by a caller's own wrapper.

use crate::client::HookifyClient;
use crate::error::Result;
use crate::params::{
    CaptionParams, CompleteParams, EmotionParams, HashtagParams, HookParams, RegisterRequest,
};
use async_trait::async_trait;
use serde_json::Value;

/// The Hookify endpoints. Responses are opaque JSON bodies.
#[async_trait]
pub trait HookifyApi: Send + Sync {
    /// Creates an account.
    async fn register(&self, request: &RegisterRequest) -> Result<Value>;

    /// Logs in, keeps the returned token for later calls, and returns it.
    async fn login(&mut self, email: &str, password: &str) -> Result<String>;

    /// Generates opening hooks.
    async fn generate_hooks(&self, params: &HookParams) -> Result<Value>;

    /// Generates captions.
    async fn generate_captions(&self, params: &CaptionParams) -> Result<Value>;

    /// Generates hashtags.
    async fn generate_hashtags(&self, params: &HashtagParams) -> Result<Value>;

    /// Analyzes the emotion of a text.
    async fn analyze_emotion(&self, params: &EmotionParams) -> Result<Value>;

    /// Generates hooks, captions, hashtags and optionally an emotion analysis.
    async fn generate_complete(&self, params: &CompleteParams) -> Result<Value>;

    /// Current subscription.
    async fn get_subscription(&self) -> Result<Value>;

    /// Usage statistics for the current period.
    async fn get_usage(&self) -> Result<Value>;
}

#[async_trait]
impl HookifyApi for HookifyClient {
    async fn register(&self, request: &RegisterRequest) -> Result<Value> {
        HookifyClient::register(self, request).await
    }

    async fn login(&mut self, email: &str, password: &str) -> Result<String> {
        HookifyClient::login(self, email, password).await
    }

    async fn generate_hooks(&self, params: &HookParams) -> Result<Value> {
        HookifyClient::generate_hooks(self, params).await
    }

    async fn generate_captions(&self, params: &CaptionParams) -> Result<Value> {
        HookifyClient::generate_captions(self, params).await
    }

    async fn generate_hashtags(&self, params: &HashtagParams) -> Result<Value> {
        HookifyClient::generate_hashtags(self, params).await
    }

    async fn analyze_emotion(&self, params: &EmotionParams) -> Result<Value> {
        HookifyClient::analyze_emotion(self, params).await
    }

    async fn generate_complete(&self, params: &CompleteParams) -> Result<Value> {
        HookifyClient::generate_complete(self, params).await
    }

    async fn get_subscription(&self) -> Result<Value> {
        HookifyClient::get_subscription(self).await
    }

    async fn get_usage(&self) -> Result<Value> {
        HookifyClient::get_usage(self).await
    }
}
