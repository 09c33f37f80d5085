//! Human-readable reports for generation results and usage.
//!
//! A complete generation without an emotion analysis (because it was not requested, or
//! the service left it out) is reported without that section; it is never an error.

use crate::error::Result;
use crate::models::{self, CompleteResponse, EmotionAnalysis, UsageStats};
use crate::params::CompleteParams;
use crate::traits::HookifyApi;
use crate::utils::{format_percentage, truncate_text};

/// Captions are cut to this many characters in reports.
pub const CAPTION_PREVIEW_CHARS: usize = 100;

/// Renders hooks, captions, hashtags, the optional emotion analysis and remaining quota.
pub fn render_complete_summary(result: &CompleteResponse) -> String {
    let mut out = String::from("📌 HOOKS:\n");
    for (i, hook) in result.hooks.iter().enumerate() {
        out.push_str(&format!("  {}. {hook}\n", i + 1));
    }

    out.push_str("\n📝 CAPTIONS:\n");
    for (i, caption) in result.captions.iter().enumerate() {
        let preview = truncate_text(caption, CAPTION_PREVIEW_CHARS);
        out.push_str(&format!("  {}. {preview}\n", i + 1));
    }

    out.push_str("\n#️⃣ HASHTAGS:\n");
    out.push_str(&format!("  {}\n", result.hashtags.join(" ")));

    if let Some(emotion) = &result.emotion_analysis {
        out.push('\n');
        out.push_str(&render_emotion(emotion));
    }

    out.push_str(&format!("\n💡 Quota remaining: {}\n", result.quota_remaining));
    out
}

fn render_emotion(emotion: &EmotionAnalysis) -> String {
    let mut out = String::from("😊 EMOTION ANALYSIS:\n");
    out.push_str(&format!("  Primary emotion: {}\n", emotion.primary_emotion));
    out.push_str(&format!(
        "  Confidence: {}\n",
        format_percentage(emotion.confidence)
    ));
    if let Some(suggestion) = emotion.suggestions.first() {
        out.push_str(&format!("  Suggestion: {suggestion}\n"));
    }
    out
}

/// Renders plan, used/monthly quota and generations this month.
pub fn render_usage_summary(usage: &UsageStats) -> String {
    let mut out = String::from("📊 USAGE:\n");
    out.push_str(&format!("  Plan: {}\n", usage.current_plan));
    out.push_str(&format!(
        "  Used: {}/{}\n",
        usage.used_quota, usage.monthly_quota
    ));
    out.push_str(&format!("  Remaining: {}\n", usage.remaining()));
    out.push_str(&format!(
        "  Generations this month: {}\n",
        usage.generations_this_month
    ));
    out
}

/// Runs a complete generation and renders it.
pub async fn complete_report<A>(api: &A, params: &CompleteParams) -> Result<String>
where
    A: HookifyApi + ?Sized,
{
    let value = api.generate_complete(params).await?;
    let result: CompleteResponse = models::from_value(value)?;
    Ok(render_complete_summary(&result))
}

/// Fetches usage statistics and renders them.
pub async fn usage_report<A>(api: &A) -> Result<String>
where
    A: HookifyApi + ?Sized,
{
    let usage: UsageStats = models::from_value(api.get_usage().await?)?;
    Ok(render_usage_summary(&usage))
}
