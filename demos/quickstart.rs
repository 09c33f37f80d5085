//! Logs in, runs a complete generation with emotion analysis, and prints usage.
//!
//! Reads `HOOKIFY_*` settings from the environment (base URL defaults to
//! `http://localhost:8000`) and `HOOKIFY_EMAIL` / `HOOKIFY_PASSWORD` for the login.

use hookify_rs::config::Config;
use hookify_rs::params::{CompleteParams, platform, tone};
use hookify_rs::summary::{complete_report, usage_report};
use hookify_rs::utils::mask_secret;
use hookify_rs::{HookifyClient, HookifyError, Result};

async fn run() -> Result<()> {
    let email = std::env::var("HOOKIFY_EMAIL").unwrap_or_else(|_| "teste@hookify.com".to_string());
    let password = std::env::var("HOOKIFY_PASSWORD").unwrap_or_else(|_| "senha12345".to_string());

    let mut client = HookifyClient::with_config(Config::from_env()?)?;

    println!("🔐 Logging in to {}...", client.base_url());
    let token = client.login(&email, &password).await?;
    println!("✓ Token: {}\n", mask_secret(&token));

    println!("🚀 Generating complete content...\n");
    let params = CompleteParams::new("marketing digital", "como vender no Instagram")
        .with_tone(tone::EDUCATIVO)
        .with_platform(platform::REELS)
        .with_call_to_action("Comenta \"QUERO\" para receber o guia completo!")
        .with_emotion_analysis(true);
    println!("{}", complete_report(&client, &params).await?);

    println!("{}", usage_report(&client).await?);
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        match &e {
            HookifyError::Api {
                payload: Some(payload),
                ..
            } => eprintln!("❌ Error: {payload}"),
            _ => eprintln!("❌ Error: {e}"),
        }
        std::process::exit(1);
    }
}
