//! Built-in catalogs
//!
//! Update the tables here when models or prices change.

use std::sync::LazyLock;

use super::models::{AuthScheme, CostDisplay, Defaults, Model, Provider, UiLimits};
use super::providers::ProviderCatalog;
use super::single::ModelCatalog;
use super::ModelResolver;

pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const MISTRAL_BASE_URL: &str = "https://api.mistral.ai/v1/chat/completions";
pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const GEMINI_API_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

static BUILTIN: LazyLock<ProviderCatalog> = LazyLock::new(|| {
    ProviderCatalog::new(
        vec![groq(), mistral(), openrouter()],
        Defaults {
            provider: Some("groq".to_string()),
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        },
        CostDisplay::default(),
        UiLimits::default(),
    )
    .expect("built-in provider catalog declares providers with models")
});

static GEMINI: LazyLock<ModelCatalog> = LazyLock::new(|| {
    ModelCatalog::new(
        GEMINI_API_ENDPOINT,
        vec![
            model(
                "gemini-2.0-flash",
                "Gemini 2.0 Flash",
                "Newest & fastest, great for most tasks",
                0.10,
                0.40,
            ),
            model(
                "gemini-2.0-flash-lite",
                "Gemini 2.0 Flash Lite",
                "Super cheap & quick, good for simple tasks",
                0.075,
                0.30,
            ),
            model(
                "gemini-1.5-pro-latest",
                "Gemini 1.5 Pro",
                "Most powerful, best for complex reasoning",
                1.25,
                5.00,
            ),
            model(
                "gemini-1.5-flash-latest",
                "Gemini 1.5 Flash",
                "Fast & affordable all-rounder",
                0.075,
                0.30,
            ),
        ],
        Defaults {
            provider: None,
            model: "gemini-2.0-flash".to_string(),
            temperature: 0.5,
            max_tokens: 1024,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        },
        CostDisplay::default(),
        UiLimits::default(),
    )
    .expect("built-in Gemini catalog declares models")
});

/// Multi-provider catalog (Groq, Mistral AI, OpenRouter)
pub fn builtin() -> &'static ProviderCatalog {
    &BUILTIN
}

/// Single-provider Gemini catalog
pub fn gemini() -> &'static ModelCatalog {
    &GEMINI
}

/// Resolve a model in the built-in multi-provider catalog, with fallback
pub fn resolve_model(model_id: &str, provider_id: Option<&str>) -> &'static Model {
    builtin().resolve_model(model_id, provider_id)
}

fn model(id: &str, label: &str, description: &str, input: f64, output: f64) -> Model {
    Model {
        id: id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        input_price_per_million: input,
        output_price_per_million: output,
    }
}

fn groq() -> Provider {
    Provider {
        id: "groq".to_string(),
        label: "Groq ⚡".to_string(),
        base_url: GROQ_BASE_URL.to_string(),
        key_placeholder: "gsk_...".to_string(),
        key_hint: "Get free key at console.groq.com".to_string(),
        auth_header: AuthScheme::Bearer,
        models: vec![
            model(
                "llama-3.3-70b-versatile",
                "Llama 3.3 70B",
                "Best quality on Groq, super fast",
                0.59,
                0.79,
            ),
            model(
                "llama-3.1-8b-instant",
                "Llama 3.1 8B Instant",
                "Fastest model, great for quick tasks",
                0.05,
                0.08,
            ),
            model(
                "mixtral-8x7b-32768",
                "Mixtral 8x7B",
                "Great all-rounder with large context",
                0.24,
                0.24,
            ),
            model(
                "gemma2-9b-it",
                "Gemma 2 9B",
                "Google's Gemma model, fast & free",
                0.20,
                0.20,
            ),
        ],
    }
}

fn mistral() -> Provider {
    Provider {
        id: "mistral".to_string(),
        label: "Mistral AI".to_string(),
        base_url: MISTRAL_BASE_URL.to_string(),
        key_placeholder: "...".to_string(),
        key_hint: "Get free key at console.mistral.ai".to_string(),
        auth_header: AuthScheme::Bearer,
        models: vec![
            model(
                "mistral-small-latest",
                "Mistral Small",
                "Fast & cheap, great for most tasks",
                0.20,
                0.60,
            ),
            model(
                "mistral-medium-latest",
                "Mistral Medium",
                "Balanced performance",
                2.70,
                8.10,
            ),
            model(
                "open-mistral-nemo",
                "Mistral Nemo",
                "Free & open, 128k context",
                0.15,
                0.15,
            ),
        ],
    }
}

fn openrouter() -> Provider {
    Provider {
        id: "openrouter".to_string(),
        label: "OpenRouter 🌐".to_string(),
        base_url: OPENROUTER_BASE_URL.to_string(),
        key_placeholder: "sk-or-...".to_string(),
        key_hint: "Get free key at openrouter.ai — access 100s of models".to_string(),
        auth_header: AuthScheme::Bearer,
        models: vec![
            model(
                "meta-llama/llama-3.3-70b-instruct:free",
                "Llama 3.3 70B (FREE)",
                "Completely free via OpenRouter",
                0.0,
                0.0,
            ),
            model(
                "google/gemma-3-27b-it:free",
                "Gemma 3 27B (FREE)",
                "Google's latest Gemma, free",
                0.0,
                0.0,
            ),
            model(
                "mistralai/mistral-7b-instruct:free",
                "Mistral 7B (FREE)",
                "Free Mistral via OpenRouter",
                0.0,
                0.0,
            ),
            model(
                "deepseek/deepseek-chat",
                "DeepSeek Chat",
                "Insanely cheap & powerful",
                0.07,
                1.10,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::validate;

    #[test]
    fn test_builtin_catalog_is_valid() {
        validate::validate_providers(builtin()).unwrap();
        validate::validate_models(gemini()).unwrap();
    }

    #[test]
    fn test_builtin_provider_order() {
        let ids: Vec<&str> = builtin().providers().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["groq", "mistral", "openrouter"]);
    }

    #[test]
    fn test_builtin_defaults_resolve() {
        assert_eq!(builtin().default_model().id, "llama-3.3-70b-versatile");
        assert_eq!(gemini().default_model().id, "gemini-2.0-flash");
    }

    #[test]
    fn test_openrouter_free_models() {
        let free = builtin()
            .models(Some("openrouter"))
            .iter()
            .filter(|m| m.is_free())
            .count();
        assert_eq!(free, 3);
    }

    #[test]
    fn test_resolve_model_free_function() {
        assert_eq!(resolve_model("open-mistral-nemo", Some("mistral")).label, "Mistral Nemo");
        assert_eq!(resolve_model("open-mistral-nemo", None).id, "llama-3.3-70b-versatile");
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(builtin(), builtin()));
    }
}
