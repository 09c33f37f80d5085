//! # Hookify API Rust Client
//!
//! A thin async client for the Hookify content-generation API: viral hooks, captions,
//! hashtags, emotion analysis, and subscription usage.
//!
//! ## Features
//!
//! - **One call, one request**: every method maps to a single HTTP request
//! - **Pass-through responses**: bodies come back as `serde_json::Value`, with optional typed views
//! - **Simple auth**: bearer token, then API key, then nothing
//! - **Explicit defaults**: every request struct spells out its default values
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hookify_rs::{HookifyClient, Result};
//! use hookify_rs::params::{CompleteParams, platform, tone};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut client = HookifyClient::new("http://localhost:8000")?;
//!     client.login("teste@hookify.com", "senha12345").await?;
//!
//!     let result = client
//!         .generate_complete(
//!             &CompleteParams::new("marketing digital", "como vender no Instagram")
//!                 .with_tone(tone::EDUCATIVO)
//!                 .with_platform(platform::REELS),
//!         )
//!         .await?;
//!     println!("{result:#}");
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod params;
pub mod summary;
pub mod traits;
pub mod utils;

// Re-export main types for convenience
pub use auth::Auth;
pub use client::HookifyClient;
pub use config::Config;
pub use error::{HookifyError, Result};
pub use traits::HookifyApi;
