//! Provider and model catalogs
//!
//! Two catalog shapes exist side by side:
//! - [`ProviderCatalog`]: models grouped under providers (Groq, Mistral, OpenRouter)
//! - [`ModelCatalog`]: a flat model list behind a single API endpoint (Gemini)
//!
//! Both implement [`ModelResolver`], so cost estimation works on either.
//! Lookups never fail: an unknown id falls back to the first entry of the
//! list being searched.

pub mod builtin;
pub mod loader;
pub mod models;
pub mod providers;
pub mod single;
pub mod validate;

pub use builtin::{builtin, gemini, resolve_model};
pub use loader::{load_catalog, ActiveCatalog};
pub use models::{
    AuthScheme, CostDisplay, Defaults, Model, Provider, UiLimits, MAX_DECIMAL_PLACES,
};
pub use providers::ProviderCatalog;
pub use single::ModelCatalog;

use tracing::debug;

/// Read access shared by both catalog variants
pub trait ModelResolver {
    /// Models offered under `provider_id`
    ///
    /// The single-provider variant ignores `provider_id`. The multi-provider
    /// variant resolves it with fallback to its first provider.
    fn models(&self, provider_id: Option<&str>) -> &[Model];

    fn defaults(&self) -> &Defaults;

    fn cost_display(&self) -> &CostDisplay;

    fn ui_limits(&self) -> &UiLimits;

    /// Look up a model, falling back to the first model of the searched list
    fn resolve_model(&self, model_id: &str, provider_id: Option<&str>) -> &Model {
        resolve_in(self.models(provider_id), model_id)
    }

    /// Strict lookup without fallback
    fn find_model(&self, model_id: &str, provider_id: Option<&str>) -> Option<&Model> {
        find_in(self.models(provider_id), model_id)
    }

    /// The model named by the defaults record
    fn default_model(&self) -> &Model {
        let defaults = self.defaults();
        self.resolve_model(&defaults.model, defaults.provider.as_deref())
    }
}

/// First model whose id equals `model_id`, in declaration order
pub fn find_in<'a>(models: &'a [Model], model_id: &str) -> Option<&'a Model> {
    models.iter().find(|m| m.id == model_id)
}

/// Linear scan with fallback to index 0
///
/// Callers must pass a non-empty slice. Catalog constructors reject empty
/// model lists, so every slice handed out by a [`ModelResolver`] qualifies.
pub fn resolve_in<'a>(models: &'a [Model], model_id: &str) -> &'a Model {
    match find_in(models, model_id) {
        Some(model) => model,
        None => {
            let fallback = &models[0];
            debug!(
                requested = model_id,
                resolved = %fallback.id,
                "Unknown model id, falling back to first entry"
            );
            fallback
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::model;
    use super::*;

    #[test]
    fn test_resolve_in_exact_match() {
        let models = vec![model("a", 1.0, 2.0), model("b", 3.0, 4.0)];
        assert_eq!(resolve_in(&models, "b").id, "b");
    }

    #[test]
    fn test_resolve_in_falls_back_to_first() {
        let models = vec![model("a", 1.0, 2.0), model("b", 3.0, 4.0)];
        assert_eq!(resolve_in(&models, "missing").id, "a");
        assert_eq!(resolve_in(&models, "").id, "a");
    }

    #[test]
    fn test_resolve_in_duplicate_ids_first_wins() {
        let models = vec![
            model("a", 1.0, 1.0),
            model("dup", 2.0, 2.0),
            model("dup", 9.0, 9.0),
        ];
        let resolved = resolve_in(&models, "dup");
        assert_eq!(resolved.input_price_per_million, 2.0);
    }

    #[test]
    fn test_find_in_is_strict() {
        let models = vec![model("a", 1.0, 2.0)];
        assert!(find_in(&models, "a").is_some());
        assert!(find_in(&models, "A").is_none());
        assert!(find_in(&models, "b").is_none());
    }
}
