//! Request payloads for each Hookify endpoint.
//!
//! Every optional parameter has its default applied when the struct is constructed, so
//! the serialized body always carries the full field set. Optional text fields the
//! caller leaves unset are sent as `null`. Nothing here validates values: the service
//! decides what is acceptable.
//!
//! ```rust
//! use hookify_rs::params::{CaptionParams, tone};
//!
//! let params = CaptionParams::new("fitness", "treino em casa")
//!     .with_tone(tone::MOTIVACIONAL)
//!     .with_max_length(80);
//! assert_eq!(params.max_length, 80);
//! assert_eq!(params.variants, 3);
//! ```

use serde::{Deserialize, Serialize};

/// Tone values the service knows about. Any other string is forwarded as-is.
pub mod tone {
    pub const DIRETO: &str = "direto";
    pub const MOTIVACIONAL: &str = "motivacional";
    pub const EDUCATIVO: &str = "educativo";
    pub const STORYTELLING: &str = "storytelling";
}

/// Platform values the service knows about. Any other string is forwarded as-is.
pub mod platform {
    pub const TIKTOK: &str = "tiktok";
    pub const REELS: &str = "reels";
    pub const SHORTS: &str = "shorts";
}

pub const DEFAULT_TONE: &str = tone::DIRETO;
pub const DEFAULT_PLATFORM: &str = platform::TIKTOK;
pub const DEFAULT_VARIANTS: u32 = 3;
pub const DEFAULT_CAPTION_MAX_LENGTH: u32 = 150;
pub const DEFAULT_HASHTAG_COUNT: u32 = 10;

/// Body of `POST /auth/register`.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

impl RegisterRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            full_name: None,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Passwords never reach logs.
macro_rules! redacted_debug {
    ($ty:ident { $($field:ident),* }) => {
        impl std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($ty))
                    $(.field(stringify!($field), &self.$field))*
                    .field("password", &"<redacted>")
                    .finish()
            }
        }
    };
}

redacted_debug!(RegisterRequest { email, full_name });
redacted_debug!(LoginRequest { email });

/// Body of `POST /v2/generate/hook`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HookParams {
    pub niche: String,
    pub topic: String,
    pub tone: String,
    pub platform: String,
    pub variants: u32,
}

impl HookParams {
    /// Tone `direto`, platform `tiktok`, 3 variants.
    pub fn new(niche: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            niche: niche.into(),
            topic: topic.into(),
            tone: DEFAULT_TONE.to_string(),
            platform: DEFAULT_PLATFORM.to_string(),
            variants: DEFAULT_VARIANTS,
        }
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn with_variants(mut self, variants: u32) -> Self {
        self.variants = variants;
        self
    }
}

/// Body of `POST /v2/generate/caption`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaptionParams {
    pub niche: String,
    pub topic: String,
    pub tone: String,
    pub product_name: Option<String>,
    pub call_to_action: Option<String>,
    pub max_length: u32,
    pub variants: u32,
}

impl CaptionParams {
    /// Tone `direto`, max length 150, 3 variants, no product or call to action.
    pub fn new(niche: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            niche: niche.into(),
            topic: topic.into(),
            tone: DEFAULT_TONE.to_string(),
            product_name: None,
            call_to_action: None,
            max_length: DEFAULT_CAPTION_MAX_LENGTH,
            variants: DEFAULT_VARIANTS,
        }
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    pub fn with_product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = Some(product_name.into());
        self
    }

    pub fn with_call_to_action(mut self, call_to_action: impl Into<String>) -> Self {
        self.call_to_action = Some(call_to_action.into());
        self
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_variants(mut self, variants: u32) -> Self {
        self.variants = variants;
        self
    }
}

/// Body of `POST /v2/generate/hashtags`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HashtagParams {
    pub niche: String,
    pub topic: String,
    pub platform: String,
    pub count: u32,
    pub include_trending: bool,
}

impl HashtagParams {
    /// Platform `tiktok`, 10 hashtags, trending included.
    pub fn new(niche: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            niche: niche.into(),
            topic: topic.into(),
            platform: DEFAULT_PLATFORM.to_string(),
            count: DEFAULT_HASHTAG_COUNT,
            include_trending: true,
        }
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_include_trending(mut self, include_trending: bool) -> Self {
        self.include_trending = include_trending;
        self
    }
}

/// Body of `POST /v2/analyze/emotion`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmotionParams {
    pub text: String,
    pub context: Option<String>,
}

impl EmotionParams {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Body of `POST /v2/generate/complete`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompleteParams {
    pub niche: String,
    pub topic: String,
    pub tone: String,
    pub platform: String,
    pub product_name: Option<String>,
    pub call_to_action: Option<String>,
    pub analyze_emotion: bool,
}

impl CompleteParams {
    /// Tone `direto`, platform `tiktok`, no emotion analysis.
    pub fn new(niche: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            niche: niche.into(),
            topic: topic.into(),
            tone: DEFAULT_TONE.to_string(),
            platform: DEFAULT_PLATFORM.to_string(),
            product_name: None,
            call_to_action: None,
            analyze_emotion: false,
        }
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn with_product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = Some(product_name.into());
        self
    }

    pub fn with_call_to_action(mut self, call_to_action: impl Into<String>) -> Self {
        self.call_to_action = Some(call_to_action.into());
        self
    }

    pub fn with_emotion_analysis(mut self, analyze_emotion: bool) -> Self {
        self.analyze_emotion = analyze_emotion;
        self
    }
}
