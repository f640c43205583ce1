use serde::{Deserialize, Serialize};

use super::models::{CostDisplay, Defaults, Model, UiLimits};
use super::ModelResolver;
use crate::error::CatalogError;

/// Flat model list served from a single API endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawModelCatalog")]
pub struct ModelCatalog {
    api_endpoint: String,
    models: Vec<Model>,
    defaults: Defaults,
    cost: CostDisplay,
    ui: UiLimits,
}

#[derive(Deserialize)]
struct RawModelCatalog {
    api_endpoint: String,
    models: Vec<Model>,
    defaults: Defaults,
    #[serde(default)]
    cost: CostDisplay,
    #[serde(default)]
    ui: UiLimits,
}

impl TryFrom<RawModelCatalog> for ModelCatalog {
    type Error = CatalogError;

    fn try_from(raw: RawModelCatalog) -> Result<Self, Self::Error> {
        Self::new(raw.api_endpoint, raw.models, raw.defaults, raw.cost, raw.ui)
    }
}

impl ModelCatalog {
    pub fn new(
        api_endpoint: impl Into<String>,
        models: Vec<Model>,
        defaults: Defaults,
        cost: CostDisplay,
        ui: UiLimits,
    ) -> Result<Self, CatalogError> {
        if models.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        Ok(Self {
            api_endpoint: api_endpoint.into(),
            models,
            defaults,
            cost,
            ui,
        })
    }

    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    pub fn all_models(&self) -> &[Model] {
        &self.models
    }

    /// Endpoint URL for a model, using the resolved (possibly fallback) id
    pub fn model_url(&self, model_id: &str) -> String {
        let model = self.resolve_model(model_id, None);
        format!("{}/{}", self.api_endpoint.trim_end_matches('/'), model.id)
    }
}

impl ModelResolver for ModelCatalog {
    fn models(&self, _provider_id: Option<&str>) -> &[Model] {
        &self.models
    }

    fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    fn cost_display(&self) -> &CostDisplay {
        &self.cost
    }

    fn ui_limits(&self) -> &UiLimits {
        &self.ui
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::model;

    fn create_test_catalog() -> ModelCatalog {
        ModelCatalog::new(
            "https://models.example/v1beta/models/",
            vec![model("fast", 0.1, 0.4), model("pro", 1.25, 5.0)],
            Defaults {
                provider: None,
                model: "pro".to_string(),
                temperature: 0.5,
                max_tokens: 1024,
                system_prompt: "You are a helpful assistant.".to_string(),
            },
            CostDisplay::default(),
            UiLimits::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_empty_model_list() {
        let result = ModelCatalog::new(
            "https://models.example",
            vec![],
            create_test_catalog().defaults().clone(),
            CostDisplay::default(),
            UiLimits::default(),
        );
        assert!(matches!(result, Err(CatalogError::EmptyCatalog)));
    }

    #[test]
    fn test_provider_id_is_ignored() {
        let catalog = create_test_catalog();
        assert_eq!(catalog.resolve_model("pro", Some("anything")).id, "pro");
        assert_eq!(catalog.resolve_model("missing", None).id, "fast");
    }

    #[test]
    fn test_default_model() {
        assert_eq!(create_test_catalog().default_model().id, "pro");
    }

    #[test]
    fn test_model_url() {
        let catalog = create_test_catalog();
        assert_eq!(
            catalog.model_url("pro"),
            "https://models.example/v1beta/models/pro"
        );
        assert_eq!(
            catalog.model_url("typo"),
            "https://models.example/v1beta/models/fast"
        );
    }
}
