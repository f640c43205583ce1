use anyhow::Result;
use colored::Colorize;
use comfy_table::Cell;
use llm_catalog::catalog::{ActiveCatalog, CostDisplay, Model};
use llm_catalog::config::Config;
use llm_catalog::pricing::format_price;
use llm_catalog::ModelResolver;
use tracing::info;

use super::new_table;

/// Execute the models command
///
/// With a provider, lists that provider's models (unknown ids fall back to
/// the first provider, matching lookup behavior). Without one, lists all.
pub fn execute(catalog: &ActiveCatalog, cfg: &Config, provider: Option<&str>) -> Result<()> {
    let display = cfg.cost.apply(catalog.cost_display());
    let default_model = catalog.default_model().id.clone();

    match (catalog.as_providers(), provider) {
        (Some(providers), Some(requested)) => {
            let resolved = providers.resolve_provider(Some(requested));
            if resolved.id != requested {
                println!(
                    "{} Unknown provider '{}', showing '{}'",
                    "!".yellow(),
                    requested,
                    resolved.id
                );
            }
            print_models(&resolved.label, &resolved.models, &display, &default_model);
        }
        (Some(providers), None) => {
            for p in providers.providers() {
                print_models(&p.label, &p.models, &display, &default_model);
            }
        }
        (None, _) => {
            print_models("Models", catalog.models(None), &display, &default_model);
        }
    }

    info!("Model listing completed");
    Ok(())
}

fn print_models(title: &str, models: &[Model], display: &CostDisplay, default_model: &str) {
    println!("{}", title.bold());

    let mut table = new_table(&["ID", "LABEL", "INPUT", "OUTPUT", "DESCRIPTION"]);
    for model in models {
        let id = if model.id == default_model {
            format!("{} *", model.id)
        } else {
            model.id.clone()
        };
        let input = if model.is_free() {
            "free".to_string()
        } else {
            format_price(display, model.input_price_per_million)
        };
        let output = if model.is_free() {
            "free".to_string()
        } else {
            format_price(display, model.output_price_per_million)
        };
        table.add_row(vec![
            Cell::new(id),
            Cell::new(&model.label),
            Cell::new(input),
            Cell::new(output),
            Cell::new(&model.description),
        ]);
    }

    println!("{}", table);
    println!();
}
