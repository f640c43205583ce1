use serde::{Deserialize, Serialize};
use tracing::debug;

use super::models::{CostDisplay, Defaults, Model, Provider, UiLimits};
use super::ModelResolver;
use crate::error::CatalogError;

/// Models grouped under providers
///
/// Construction guarantees at least one provider and at least one model per
/// provider, which is what makes every lookup total. Fields are private and
/// only exposed by shared reference, so a built catalog cannot change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProviderCatalog")]
pub struct ProviderCatalog {
    providers: Vec<Provider>,
    defaults: Defaults,
    cost: CostDisplay,
    ui: UiLimits,
}

/// On-disk shape, checked by [`ProviderCatalog::new`] before use
#[derive(Deserialize)]
struct RawProviderCatalog {
    providers: Vec<Provider>,
    defaults: Defaults,
    #[serde(default)]
    cost: CostDisplay,
    #[serde(default)]
    ui: UiLimits,
}

impl TryFrom<RawProviderCatalog> for ProviderCatalog {
    type Error = CatalogError;

    fn try_from(raw: RawProviderCatalog) -> Result<Self, Self::Error> {
        Self::new(raw.providers, raw.defaults, raw.cost, raw.ui)
    }
}

impl ProviderCatalog {
    /// Build a catalog, rejecting empty provider or model lists
    ///
    /// Other invariants (unique ids, prices, defaults) are checked by
    /// [`crate::catalog::validate`]; lookups stay well-defined without them.
    pub fn new(
        providers: Vec<Provider>,
        defaults: Defaults,
        cost: CostDisplay,
        ui: UiLimits,
    ) -> Result<Self, CatalogError> {
        if providers.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        if let Some(empty) = providers.iter().find(|p| p.models.is_empty()) {
            return Err(CatalogError::EmptyProvider(empty.id.clone()));
        }

        Ok(Self {
            providers,
            defaults,
            cost,
            ui,
        })
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Strict provider lookup without fallback
    pub fn find_provider(&self, provider_id: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == provider_id)
    }

    /// First provider with a matching id, otherwise the first provider
    pub fn resolve_provider(&self, provider_id: Option<&str>) -> &Provider {
        if let Some(provider) = provider_id.and_then(|id| self.find_provider(id)) {
            return provider;
        }

        let fallback = &self.providers[0];
        if let Some(requested) = provider_id {
            debug!(
                requested,
                resolved = %fallback.id,
                "Unknown provider id, falling back to first provider"
            );
        }
        fallback
    }

    /// Total number of models across all providers
    pub fn model_count(&self) -> usize {
        self.providers.iter().map(|p| p.models.len()).sum()
    }
}

impl ModelResolver for ProviderCatalog {
    fn models(&self, provider_id: Option<&str>) -> &[Model] {
        &self.resolve_provider(provider_id).models
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
