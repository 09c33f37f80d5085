//! The Hookify API client.
//!
//! [`HookifyClient`] holds the connection settings and credentials and exposes one
//! method per remote endpoint. Each method sends exactly one request and returns the
//! response body unmodified.
//!
//! ## Authentication
//!
//! Each request authenticates with the bearer token if one is set, otherwise with the
//! API key if one is set, otherwise with nothing. [`HookifyClient::login`] stores the
//! token it receives, replacing any previous one.
//!
//! Methods that change credentials take `&mut self`. To share one client between tasks,
//! wrap it in a lock (for example `tokio::sync::RwLock`).
//!
//! ```rust,no_run
//! use hookify_rs::{HookifyClient, Result};
//! use hookify_rs::params::HookParams;
//!
//! # async fn example() -> Result<()> {
//! let mut client = HookifyClient::new("http://localhost:8000")?;
//! client.login("teste@hookify.com", "senha12345").await?;
//!
//! let hooks = client.generate_hooks(&HookParams::new("fitness", "treino em casa")).await?;
//! println!("{hooks}");
//! # Ok(())
//! # }
//! ```

use crate::auth::Auth;
use crate::config::Config;
use crate::error::{HookifyError, Result};
use crate::http::HookifyHttpClient;
use crate::params::{
    CaptionParams, CompleteParams, EmotionParams, HashtagParams, HookParams, LoginRequest,
    RegisterRequest,
};
use crate::utils::mask_secret;
use serde_json::Value;
use tracing::info;

pub(crate) mod endpoints {
    pub const REGISTER: &str = "/auth/register";
    pub const LOGIN: &str = "/auth/login";
    pub const GENERATE_HOOK: &str = "/v2/generate/hook";
    pub const GENERATE_CAPTION: &str = "/v2/generate/caption";
    pub const GENERATE_HASHTAGS: &str = "/v2/generate/hashtags";
    pub const ANALYZE_EMOTION: &str = "/v2/analyze/emotion";
    pub const GENERATE_COMPLETE: &str = "/v2/generate/complete";
    pub const SUBSCRIPTION: &str = "/subscription";
    pub const USAGE: &str = "/subscription/usage";
}

/// Client for the Hookify content-generation API.
#[derive(Clone)]
pub struct HookifyClient {
    http: HookifyHttpClient,
    api_key: Option<String>,
    token: Option<String>,
}

impl HookifyClient {
    /// Creates an unauthenticated client for `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::with_base_url(base_url))
    }

    /// Creates a client that authenticates with an API key.
    pub fn with_api_key(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let mut client = Self::new(base_url)?;
        client.api_key = Some(api_key.into());
        Ok(client)
    }

    /// Creates a client that authenticates with an existing bearer token.
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let mut client = Self::new(base_url)?;
        client.token = Some(token.into());
        Ok(client)
    }

    /// Creates a client from a full configuration, including initial credentials.
    pub fn with_config(config: Config) -> Result<Self> {
        let api_key = config.credentials.api_key.clone();
        let token = config.credentials.token.clone();
        let http = HookifyHttpClient::with_config(config)?;
        Ok(Self {
            http,
            api_key,
            token,
        })
    }

    /// The auth mode the next request will use.
    pub fn auth(&self) -> Auth {
        Auth::resolve(self.token.as_deref(), self.api_key.as_deref())
    }

    /// True when a token or API key is present.
    pub fn is_authenticated(&self) -> bool {
        !self.auth().is_none()
    }

    /// The bearer token, if one is set.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The API key, if one is set.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Replaces the bearer token used by subsequent calls.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drops the bearer token; requests fall back to the API key, if any.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Replaces the API key used when no bearer token is set.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = Some(api_key.into());
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.http.config().http.base_url
    }

    /// Creates an account. `POST /auth/register`
    pub async fn register(&self, request: &RegisterRequest) -> Result<Value> {
        self.http
            .post_json(endpoints::REGISTER, &Auth::None, request)
            .await
    }

    /// Logs in and stores the returned bearer token for subsequent calls.
    /// `POST /auth/login`
    pub async fn login(&mut self, email: &str, password: &str) -> Result<String> {
        let body = LoginRequest::new(email, password);
        let response = self
            .http
            .post_json(endpoints::LOGIN, &Auth::None, &body)
            .await?;

        let token = response
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| HookifyError::unexpected(200, "login response has no access_token"))?
            .to_string();

        info!("Logged in as {email}, token {}", mask_secret(&token));
        self.token = Some(token.clone());
        Ok(token)
    }

    /// `POST /v2/generate/hook`
    pub async fn generate_hooks(&self, params: &HookParams) -> Result<Value> {
        self.post(endpoints::GENERATE_HOOK, params).await
    }

    /// `POST /v2/generate/caption`
    pub async fn generate_captions(&self, params: &CaptionParams) -> Result<Value> {
        self.post(endpoints::GENERATE_CAPTION, params).await
    }

    /// `POST /v2/generate/hashtags`
    pub async fn generate_hashtags(&self, params: &HashtagParams) -> Result<Value> {
        self.post(endpoints::GENERATE_HASHTAGS, params).await
    }

    /// `POST /v2/analyze/emotion`
    pub async fn analyze_emotion(&self, params: &EmotionParams) -> Result<Value> {
        self.post(endpoints::ANALYZE_EMOTION, params).await
    }

    /// Hooks, captions, hashtags, optional emotion analysis and remaining quota in one call.
    /// `POST /v2/generate/complete`
    pub async fn generate_complete(&self, params: &CompleteParams) -> Result<Value> {
        self.post(endpoints::GENERATE_COMPLETE, params).await
    }

    /// `GET /subscription`
    pub async fn get_subscription(&self) -> Result<Value> {
        self.http.get_json(endpoints::SUBSCRIPTION, &self.auth()).await
    }

    /// `GET /subscription/usage`
    pub async fn get_usage(&self) -> Result<Value> {
        self.http.get_json(endpoints::USAGE, &self.auth()).await
    }

    async fn post<T: serde::Serialize>(&self, endpoint: &str, body: &T) -> Result<Value> {
        self.http.post_json(endpoint, &self.auth(), body).await
    }
}

impl std::fmt::Debug for HookifyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookifyClient")
            .field("base_url", &self.base_url())
            .field("auth", &self.auth())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::API_KEY_HEADER;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn ok_json(body: Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(body)
    }

    async fn last_request(server: &MockServer) -> Request {
        server
            .received_requests()
            .await
            .unwrap()
            .pop()
            .expect("no request received")
    }

    async fn mount_login(server: &MockServer, token: &str) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({"email": "a@b.com", "password": "pw"})))
            .respond_with(ok_json(json!({"access_token": token, "token_type": "bearer"})))
            .mount(server)
            .await;
    }

    #[test]
    fn test_state_transitions() {
        let mut client = HookifyClient::new("http://localhost:8000").unwrap();
        assert!(!client.is_authenticated());
        assert_eq!(client.auth(), Auth::None);

        client.set_api_key("hk_key");
        assert_eq!(client.auth(), Auth::ApiKey("hk_key".to_string()));

        client.set_token("jwt");
        assert_eq!(client.auth(), Auth::Bearer("jwt".to_string()));

        client.clear_token();
        assert_eq!(client.auth().mode(), "api-key");

        let debug = format!("{client:?}");
        assert!(debug.contains("Auth::api-key"));
        assert!(!debug.contains("hk_key"));
    }

    #[test]
    fn test_with_config_credentials() {
        let config = Config::builder().api_key("hk_key").token("jwt").build();
        let client = HookifyClient::with_config(config).unwrap();
        assert_eq!(client.api_key(), Some("hk_key"));
        assert_eq!(client.token(), Some("jwt"));
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_bearer_token_header_only() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/generate/hook"))
            .respond_with(ok_json(json!({"hooks": ["h"], "quota_remaining": 9})))
            .mount(&server)
            .await;

        let mut client = HookifyClient::with_api_key(server.uri(), "hk_key").unwrap();
        client.set_token("jwt");
        client
            .generate_hooks(&HookParams::new("fitness", "treino"))
            .await
            .unwrap();

        let request = last_request(&server).await;
        assert_eq!(request.headers.get("authorization").unwrap(), "Bearer jwt");
        assert!(request.headers.get(API_KEY_HEADER).is_none());
    }

    #[tokio::test]
    async fn test_api_key_header_only() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/subscription"))
            .and(header("x-api-key", "hk_key"))
            .respond_with(ok_json(json!({"plan_type": "FREE"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = HookifyClient::with_api_key(server.uri(), "hk_key").unwrap();
        let subscription = client.get_subscription().await.unwrap();
        assert_eq!(subscription, json!({"plan_type": "FREE"}));

        let request = last_request(&server).await;
        assert!(request.headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_empty_token_falls_back_to_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/generate/hook"))
            .and(header("x-api-key", "hk_key"))
            .respond_with(ok_json(json!({"hooks": ["h"]})))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = HookifyClient::with_api_key(server.uri(), "hk_key").unwrap();
        client.set_token("");
        assert_eq!(client.auth(), Auth::ApiKey("hk_key".to_string()));

        client
            .generate_hooks(&HookParams::new("fitness", "treino"))
            .await
            .unwrap();

        let request = last_request(&server).await;
        assert!(request.headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_invalid_token_is_reported_not_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/generate/hook"))
            .respond_with(ok_json(json!({"hooks": ["h"]})))
            .expect(0)
            .mount(&server)
            .await;

        let mut client = HookifyClient::with_api_key(server.uri(), "hk_key").unwrap();
        client.set_token("bad\ntoken");

        let err = client
            .generate_hooks(&HookParams::new("fitness", "treino"))
            .await
            .unwrap_err();

        assert!(matches!(err, HookifyError::Config { .. }));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_auth_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/subscription/usage"))
            .respond_with(ok_json(json!({"current_plan": "FREE"})))
            .mount(&server)
            .await;

        let client = HookifyClient::new(server.uri()).unwrap();
        client.get_usage().await.unwrap();

        let request = last_request(&server).await;
        assert!(request.headers.get("authorization").is_none());
        assert!(request.headers.get(API_KEY_HEADER).is_none());
    }

    #[tokio::test]
    async fn test_login_replaces_prior_token() {
        let server = MockServer::start().await;
        mount_login(&server, "fresh-token").await;
        Mock::given(method("POST"))
            .and(path("/v2/generate/hashtags"))
            .and(header("authorization", "Bearer fresh-token"))
            .respond_with(ok_json(json!({"hashtags": ["#fit"]})))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = HookifyClient::with_token(server.uri(), "stale-token").unwrap();
        let token = client.login("a@b.com", "pw").await.unwrap();

        assert_eq!(token, "fresh-token");
        assert_eq!(client.token(), Some("fresh-token"));
        client
            .generate_hashtags(&HashtagParams::new("fitness", "dieta"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_login_sends_no_auth() {
        let server = MockServer::start().await;
        mount_login(&server, "t").await;

        let mut client = HookifyClient::with_token(server.uri(), "old").unwrap();
        client.login("a@b.com", "pw").await.unwrap();

        let request = last_request(&server).await;
        assert!(request.headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_login_without_token_keeps_state() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ok_json(json!({"detail": "ok?"})))
            .mount(&server)
            .await;

        let mut client = HookifyClient::with_token(server.uri(), "old").unwrap();
        let err = client.login("a@b.com", "pw").await.unwrap_err();

        assert!(matches!(err, HookifyError::UnexpectedResponse { .. }));
        assert_eq!(client.token(), Some("old"));
    }

    #[tokio::test]
    async fn test_register_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .and(body_json(json!({
                "email": "teste@hookify.com",
                "password": "senha12345",
                "full_name": "Usuário Teste"
            })))
            .respond_with(ok_json(json!({"id": 1, "email": "teste@hookify.com"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = HookifyClient::new(server.uri()).unwrap();
        let account = client
            .register(
                &RegisterRequest::new("teste@hookify.com", "senha12345")
                    .with_full_name("Usuário Teste"),
            )
            .await
            .unwrap();
        assert_eq!(account["email"], "teste@hookify.com");
    }

    #[tokio::test]
    async fn test_caption_max_length_on_the_wire() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/generate/caption"))
            .respond_with(ok_json(json!({"captions": []})))
            .mount(&server)
            .await;

        let client = HookifyClient::new(server.uri()).unwrap();
        client
            .generate_captions(&CaptionParams::new("a", "b"))
            .await
            .unwrap();
        let sent: Value = last_request(&server).await.body_json().unwrap();
        assert_eq!(sent["max_length"], 150);

        client
            .generate_captions(&CaptionParams::new("a", "b").with_max_length(80))
            .await
            .unwrap();
        let sent: Value = last_request(&server).await.body_json().unwrap();
        assert_eq!(sent["max_length"], 80);
    }

    #[tokio::test]
    async fn test_hashtag_defaults_on_the_wire() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/generate/hashtags"))
            .and(body_json(json!({
                "niche": "fitness",
                "topic": "dieta",
                "platform": "tiktok",
                "count": 10,
                "include_trending": true
            })))
            .respond_with(ok_json(json!({"hashtags": ["#fit"]})))
            .expect(1)
            .mount(&server)
            .await;

        let client = HookifyClient::new(server.uri()).unwrap();
        client
            .generate_hashtags(&HashtagParams::new("fitness", "dieta"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_emotion_and_complete_pass_through() {
        let server = MockServer::start().await;
        let emotion = json!({
            "primary_emotion": "surpresa",
            "confidence": 0.6,
            "emotions_breakdown": {"surpresa": 0.6},
            "suggestions": []
        });
        Mock::given(method("POST"))
            .and(path("/v2/analyze/emotion"))
            .and(body_json(json!({"text": "Uau!", "context": "reels"})))
            .respond_with(ok_json(emotion.clone()))
            .mount(&server)
            .await;
        let complete = json!({
            "hooks": ["h"],
            "captions": ["c"],
            "hashtags": ["#x"],
            "quota_remaining": 3,
            "unknown_field": {"kept": true}
        });
        Mock::given(method("POST"))
            .and(path("/v2/generate/complete"))
            .and(body_json(json!({
                "niche": "n",
                "topic": "t",
                "tone": "direto",
                "platform": "tiktok",
                "product_name": "Curso X",
                "call_to_action": null,
                "analyze_emotion": false
            })))
            .respond_with(ok_json(complete.clone()))
            .mount(&server)
            .await;

        let client = HookifyClient::with_api_key(server.uri(), "hk").unwrap();
        let got = client
            .analyze_emotion(&EmotionParams::new("Uau!").with_context("reels"))
            .await
            .unwrap();
        assert_eq!(got, emotion);

        let got = client
            .generate_complete(&CompleteParams::new("n", "t").with_product_name("Curso X"))
            .await
            .unwrap();
        assert_eq!(got, complete);
    }

    #[tokio::test]
    async fn test_remote_error_payload_reaches_caller() {
        let server = MockServer::start().await;
        let detail = json!({
            "detail": "Quota mensal excedida. Faça upgrade do seu plano para continuar."
        });
        Mock::given(method("POST"))
            .and(path("/v2/generate/complete"))
            .respond_with(ResponseTemplate::new(429).set_body_json(detail.clone()))
            .mount(&server)
            .await;

        let client = HookifyClient::with_token(server.uri(), "jwt").unwrap();
        let err = client
            .generate_complete(&CompleteParams::new("n", "t"))
            .await
            .unwrap_err();

        assert!(err.is_quota_exceeded());
        assert_eq!(err.remote_payload(), Some(&detail));
    }
}
