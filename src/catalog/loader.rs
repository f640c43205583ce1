use std::borrow::Cow;
use std::path::Path;

use tracing::{debug, info};

use super::builtin::{builtin, gemini};
use super::models::{CostDisplay, Defaults, Model, UiLimits};
use super::providers::ProviderCatalog;
use super::single::ModelCatalog;
use super::validate::{validate_models, validate_providers};
use super::ModelResolver;
use crate::config::{CatalogConfig, CatalogVariant};
use crate::error::CatalogError;

/// The catalog selected for this process
///
/// Built-in catalogs are borrowed from their statics; catalogs read from a
/// file are owned. Either way callers only ever see shared references.
#[derive(Debug, Clone)]
pub enum ActiveCatalog {
    Providers(Cow<'static, ProviderCatalog>),
    Models(Cow<'static, ModelCatalog>),
}

impl ActiveCatalog {
    pub fn builtin(variant: CatalogVariant) -> Self {
        match variant {
            CatalogVariant::Multi => ActiveCatalog::Providers(Cow::Borrowed(builtin())),
            CatalogVariant::Gemini => ActiveCatalog::Models(Cow::Borrowed(gemini())),
        }
    }

    pub fn variant(&self) -> CatalogVariant {
        match self {
            ActiveCatalog::Providers(_) => CatalogVariant::Multi,
            ActiveCatalog::Models(_) => CatalogVariant::Gemini,
        }
    }

    /// Whether this catalog is one of the built-in tables
    pub fn is_builtin(&self) -> bool {
        match self {
            ActiveCatalog::Providers(cat) => matches!(cat, Cow::Borrowed(_)),
            ActiveCatalog::Models(cat) => matches!(cat, Cow::Borrowed(_)),
        }
    }

    pub fn as_providers(&self) -> Option<&ProviderCatalog> {
        match self {
            ActiveCatalog::Providers(cat) => Some(&**cat),
            ActiveCatalog::Models(_) => None,
        }
    }

    pub fn as_models(&self) -> Option<&ModelCatalog> {
        match self {
            ActiveCatalog::Providers(_) => None,
            ActiveCatalog::Models(cat) => Some(&**cat),
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        match self {
            ActiveCatalog::Providers(cat) => validate_providers(cat),
            ActiveCatalog::Models(cat) => validate_models(cat),
        }
    }
}

impl ModelResolver for ActiveCatalog {
    fn models(&self, provider_id: Option<&str>) -> &[Model] {
        match self {
            ActiveCatalog::Providers(cat) => cat.models(provider_id),
            ActiveCatalog::Models(cat) => cat.models(provider_id),
        }
    }

    fn defaults(&self) -> &Defaults {
        match self {
            ActiveCatalog::Providers(cat) => cat.defaults(),
            ActiveCatalog::Models(cat) => cat.defaults(),
        }
    }

    fn cost_display(&self) -> &CostDisplay {
        match self {
            ActiveCatalog::Providers(cat) => cat.cost_display(),
            ActiveCatalog::Models(cat) => cat.cost_display(),
        }
    }

    fn ui_limits(&self) -> &UiLimits {
        match self {
            ActiveCatalog::Providers(cat) => cat.ui_limits(),
            ActiveCatalog::Models(cat) => cat.ui_limits(),
        }
    }
}

/// Parse and validate a multi-provider catalog from TOML
pub fn parse_provider_catalog(content: &str) -> Result<ProviderCatalog, CatalogError> {
    let catalog: ProviderCatalog = toml::from_str(content)?;
    validate_providers(&catalog)?;
    Ok(catalog)
}

/// Parse and validate a single-provider catalog from TOML
pub fn parse_model_catalog(content: &str) -> Result<ModelCatalog, CatalogError> {
    let catalog: ModelCatalog = toml::from_str(content)?;
    validate_models(&catalog)?;
    Ok(catalog)
}

/// Read a catalog file of the given variant
pub fn read_catalog_file(
    path: &Path,
    variant: CatalogVariant,
) -> Result<ActiveCatalog, CatalogError> {
    info!("Loading {} catalog from: {}", variant, path.display());
    let content = std::fs::read_to_string(path)?;
    debug!("Read {} bytes of catalog data", content.len());

    let catalog = match variant {
        CatalogVariant::Multi => {
            let catalog = parse_provider_catalog(&content)?;
            info!(
                "Loaded {} providers with {} models",
                catalog.providers().len(),
                catalog.model_count()
            );
            ActiveCatalog::Providers(Cow::Owned(catalog))
        }
        CatalogVariant::Gemini => {
            let catalog = parse_model_catalog(&content)?;
            info!("Loaded {} models", catalog.all_models().len());
            ActiveCatalog::Models(Cow::Owned(catalog))
        }
    };

    Ok(catalog)
}

/// Select the catalog named by the configuration
pub fn load_catalog(cfg: &CatalogConfig) -> Result<ActiveCatalog, CatalogError> {
    match &cfg.path {
        Some(path) => read_catalog_file(path, cfg.variant),
        None => {
            debug!("Using built-in {} catalog", cfg.variant);
            Ok(ActiveCatalog::builtin(cfg.variant))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PROVIDER_CATALOG: &str = r#"
        [[providers]]
        id = "local"
        label = "Local"
        base_url = "http://localhost:8000/v1/chat/completions"
        key_placeholder = "none"
        key_hint = "No key required"
        auth_header = "Bearer"

        [[providers.models]]
        id = "tiny"
        label = "Tiny"
        description = "Small local model"
        input_price_per_million = 0.0
        output_price_per_million = 0.0

        [defaults]
        provider = "local"
        model = "tiny"
        temperature = 0.2
        max_tokens = 512
        system_prompt = "Be brief."

        [cost]
        decimal_places = 4
        currency = "EUR"
    "#;

    #[test]
    fn test_parse_provider_catalog() {
        let catalog = parse_provider_catalog(PROVIDER_CATALOG).unwrap();
        assert_eq!(catalog.providers().len(), 1);
        assert_eq!(catalog.cost_display().decimal_places, 4);
        assert_eq!(catalog.cost_display().currency, "EUR");
        // ui section omitted -> defaults
        assert_eq!(catalog.ui_limits().max_tokens_max, 8192);
    }

    #[test]
    fn test_parse_provider_catalog_rejects_unknown_default() {
        let content = PROVIDER_CATALOG.replace("model = \"tiny\"", "model = \"huge\"");
        let err = parse_provider_catalog(&content).unwrap_err();
        assert_eq!(err.kind_name(), "unknown_default");
    }

    const MODEL_CATALOG: &str = r#"
        api_endpoint = "https://models.example/v1"

        [[models]]
        id = "m1"
        label = "M1"
        description = "First"
        input_price_per_million = 0.5
        output_price_per_million = 1.5

        [defaults]
        model = "m1"
        temperature = 0.5
        max_tokens = 1024
        system_prompt = "You are a helpful assistant."
    "#;

    #[test]
    fn test_parse_model_catalog() {
        let catalog = parse_model_catalog(MODEL_CATALOG).unwrap();
        assert_eq!(catalog.api_endpoint(), "https://models.example/v1");
        assert_eq!(catalog.all_models().len(), 1);
    }

    #[test]
    fn test_parse_rejects_oversized_decimal_places() {
        let content = format!("{}\n[cost]\ndecimal_places = 70000\n", MODEL_CATALOG);
        let err = parse_model_catalog(&content).unwrap_err();
        assert_eq!(err.kind_name(), "invalid_cost_display");

        let content = PROVIDER_CATALOG.replace("decimal_places = 4", "decimal_places = 70000");
        let err = parse_provider_catalog(&content).unwrap_err();
        assert_eq!(err.kind_name(), "invalid_cost_display");
    }

    #[test]
    fn test_parse_rejects_nan_temperature_bound() {
        let content = format!("{}\n[ui]\ntemperature_min = nan\n", MODEL_CATALOG);
        let err = parse_model_catalog(&content).unwrap_err();
        assert_eq!(err.kind_name(), "invalid_ui_range");
    }

    #[test]
    fn test_read_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PROVIDER_CATALOG.as_bytes()).unwrap();

        let catalog = read_catalog_file(file.path(), CatalogVariant::Multi).unwrap();
        assert_eq!(catalog.variant(), CatalogVariant::Multi);
        assert!(!catalog.is_builtin());
        assert_eq!(catalog.resolve_model("anything", None).id, "tiny");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_catalog_file(Path::new("/nonexistent/catalog.toml"), CatalogVariant::Gemini)
            .unwrap_err();
        assert_eq!(err.kind_name(), "io_error");
    }

    #[test]
    fn test_load_builtin_catalog() {
        let cfg = CatalogConfig {
            variant: CatalogVariant::Gemini,
            path: None,
        };
        let catalog = load_catalog(&cfg).unwrap();
        assert!(catalog.is_builtin());
        assert!(catalog.as_models().is_some());
        assert!(catalog.as_providers().is_none());
        assert_eq!(catalog.default_model().id, "gemini-2.0-flash");
        assert!(catalog.validate().is_ok());
    }
}
