use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub use crate::catalog::MAX_DECIMAL_PLACES;

use crate::catalog::CostDisplay;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_NAME: &str = "llm-catalog";

/// Environment prefix, e.g. `LLM_CATALOG__CATALOG__VARIANT=gemini`
pub const ENV_PREFIX: &str = "LLM_CATALOG";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub cost: CostOverrides,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub variant: CatalogVariant,
    /// Replace the built-in catalog of `variant` with this TOML file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Which catalog shape to serve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CatalogVariant {
    /// Providers grouping models (Groq, Mistral, OpenRouter)
    #[default]
    Multi,
    /// Single Gemini endpoint
    Gemini,
}

impl fmt::Display for CatalogVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogVariant::Multi => write!(f, "multi"),
            CatalogVariant::Gemini => write!(f, "gemini"),
        }
    }
}

/// Optional overrides of the catalog's cost display settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CostOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl CostOverrides {
    /// Display settings with overrides applied on top of `base`
    pub fn apply(&self, base: &CostDisplay) -> CostDisplay {
        CostDisplay {
            decimal_places: self.decimal_places.unwrap_or(base.decimal_places),
            currency: self
                .currency
                .clone()
                .unwrap_or_else(|| base.currency.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Load configuration from `path` (required) or the optional default file,
/// then apply `LLM_CATALOG__*` environment overrides
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let config = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if let Some(places) = cfg.cost.decimal_places {
        if places > MAX_DECIMAL_PLACES {
            anyhow::bail!(
                "cost.decimal_places must be at most {}, got {}",
                MAX_DECIMAL_PLACES,
                places
            );
        }
    }

    if let Some(currency) = &cfg.cost.currency {
        if currency.trim().is_empty() {
            anyhow::bail!("cost.currency cannot be empty");
        }
    }

    if cfg.logging.level.trim().is_empty() {
        anyhow::bail!("logging.level cannot be empty");
    }

    if let Some(path) = &cfg.catalog.path {
        if path.as_os_str().is_empty() {
            anyhow::bail!("catalog.path cannot be empty when set");
        }
    }

    Ok(())
}
