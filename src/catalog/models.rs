use serde::{Deserialize, Serialize};
use std::fmt;

/// A selectable model with per-million-token pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub label: String,
    pub description: String,
    /// Price per 1M input tokens
    pub input_price_per_million: f64,
    /// Price per 1M output tokens
    pub output_price_per_million: f64,
}

impl Model {
    /// Both prices are zero
    pub fn is_free(&self) -> bool {
        self.input_price_per_million == 0.0 && self.output_price_per_million == 0.0
    }
}

/// Authorization header scheme used by a provider
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuthScheme {
    #[default]
    Bearer,
    /// Any other scheme, kept verbatim
    Custom(String),
}

impl AuthScheme {
    pub fn as_str(&self) -> &str {
        match self {
            AuthScheme::Bearer => "Bearer",
            AuthScheme::Custom(scheme) => scheme,
        }
    }
}

impl From<String> for AuthScheme {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("bearer") {
            AuthScheme::Bearer
        } else {
            AuthScheme::Custom(value)
        }
    }
}

impl From<AuthScheme> for String {
    fn from(value: AuthScheme) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An upstream service exposing models under a shared base URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub label: String,
    pub base_url: String,
    /// Placeholder shown in an empty API key field
    pub key_placeholder: String,
    /// Where to obtain a key
    pub key_hint: String,
    #[serde(default)]
    pub auth_header: AuthScheme,
    pub models: Vec<Model>,
}

impl Provider {
    /// Header name and value authenticating `api_key` against this provider
    pub fn authorization_header(&self, api_key: &str) -> (&'static str, String) {
        ("Authorization", format!("{} {}", self.auth_header, api_key))
    }
}

/// Defaults applied when nothing has been selected yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Only set in the multi-provider variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub system_prompt: String,
}

/// Maximum decimal places accepted for cost display
pub const MAX_DECIMAL_PLACES: u32 = 12;

/// Display settings for computed costs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostDisplay {
    pub decimal_places: u32,
    pub currency: String,
}

impl Default for CostDisplay {
    fn default() -> Self {
        Self {
            decimal_places: 6,
            currency: "USD".to_string(),
        }
    }
}

/// Slider bounds offered to the caller's settings UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiLimits {
    pub app_name: String,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub temperature_step: f64,
    pub max_tokens_min: u32,
    pub max_tokens_max: u32,
    pub max_tokens_step: u32,
}

impl Default for UiLimits {
    fn default() -> Self {
        Self {
            app_name: "Illias ✨".to_string(),
            temperature_min: 0.0,
            temperature_max: 2.0,
            temperature_step: 0.05,
            max_tokens_min: 256,
            max_tokens_max: 8192,
            max_tokens_step: 256,
        }
    }
}
