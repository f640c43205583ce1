//! Catalog invariant checks
//!
//! Constructors only guarantee non-empty lists. Loaded catalog files go through
//! these checks as well, so typos in ids and prices are caught at load time
//! instead of being masked by lookup fallback.

use std::collections::HashSet;

use super::models::{CostDisplay, Model, UiLimits, MAX_DECIMAL_PLACES};
use super::providers::ProviderCatalog;
use super::single::ModelCatalog;
use super::ModelResolver;
use crate::error::CatalogError;

/// Check every invariant of a multi-provider catalog
pub fn validate_providers(catalog: &ProviderCatalog) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (index, provider) in catalog.providers().iter().enumerate() {
        if provider.id.is_empty() {
            return Err(CatalogError::EmptyId {
                kind: "provider",
                index,
            });
        }
        if !seen.insert(provider.id.as_str()) {
            return Err(CatalogError::DuplicateProvider(provider.id.clone()));
        }
        validate_model_list(&provider.models, &format!("provider '{}'", provider.id))?;
    }

    let defaults = catalog.defaults();
    if let Some(provider_id) = &defaults.provider {
        if catalog.find_provider(provider_id).is_none() {
            return Err(CatalogError::UnknownDefault {
                kind: "provider",
                id: provider_id.clone(),
            });
        }
    }
    if catalog
        .find_model(&defaults.model, defaults.provider.as_deref())
        .is_none()
    {
        return Err(CatalogError::UnknownDefault {
            kind: "model",
            id: defaults.model.clone(),
        });
    }

    validate_cost_display(catalog.cost_display())?;
    validate_ui_limits(catalog.ui_limits())
}

/// Check every invariant of a single-provider catalog
pub fn validate_models(catalog: &ModelCatalog) -> Result<(), CatalogError> {
    validate_model_list(catalog.all_models(), "catalog")?;

    let defaults = catalog.defaults();
    if catalog.find_model(&defaults.model, None).is_none() {
        return Err(CatalogError::UnknownDefault {
            kind: "model",
            id: defaults.model.clone(),
        });
    }

    validate_cost_display(catalog.cost_display())?;
    validate_ui_limits(catalog.ui_limits())
}

fn validate_model_list(models: &[Model], scope: &str) -> Result<(), CatalogError> {
    if models.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    let mut seen = HashSet::new();
    for (index, model) in models.iter().enumerate() {
        if model.id.is_empty() {
            return Err(CatalogError::EmptyId {
                kind: "model",
                index,
            });
        }
        if !seen.insert(model.id.as_str()) {
            return Err(CatalogError::DuplicateModel {
                scope: scope.to_string(),
                model: model.id.clone(),
            });
        }
        check_price(model, "input_price_per_million", model.input_price_per_million)?;
        check_price(model, "output_price_per_million", model.output_price_per_million)?;
    }

    Ok(())
}

fn check_price(model: &Model, field: &'static str, value: f64) -> Result<(), CatalogError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CatalogError::InvalidPrice {
            model: model.id.clone(),
            field,
            value,
        })
    }
}

fn validate_cost_display(display: &CostDisplay) -> Result<(), CatalogError> {
    if display.decimal_places > MAX_DECIMAL_PLACES {
        return Err(CatalogError::InvalidCostDisplay(format!(
            "decimal_places must be at most {}, got {}",
            MAX_DECIMAL_PLACES, display.decimal_places
        )));
    }
    if display.currency.trim().is_empty() {
        return Err(CatalogError::InvalidCostDisplay(
            "currency cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_ui_limits(ui: &UiLimits) -> Result<(), CatalogError> {
    let bounds = [ui.temperature_min, ui.temperature_max, ui.temperature_step];
    if bounds.iter().any(|v| !v.is_finite())
        || ui.temperature_min > ui.temperature_max
        || ui.temperature_step < 0.0
    {
        return Err(CatalogError::InvalidUiRange("temperature"));
    }
    if ui.max_tokens_min > ui.max_tokens_max {
        return Err(CatalogError::InvalidUiRange("max_tokens"));
    }
    Ok(())
}
