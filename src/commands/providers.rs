use anyhow::Result;
use colored::Colorize;
use comfy_table::Cell;
use llm_catalog::catalog::ActiveCatalog;
use llm_catalog::ModelResolver;
use tracing::info;

use super::new_table;

/// Execute the providers command
///
/// Lists every provider of the multi-provider catalog in declaration order
pub fn execute(catalog: &ActiveCatalog) -> Result<()> {
    let Some(providers) = catalog.as_providers() else {
        println!(
            "{}",
            "The gemini catalog has a single endpoint and no providers".yellow()
        );
        if let Some(models) = catalog.as_models() {
            println!("  Endpoint: {}", models.api_endpoint());
        }
        return Ok(());
    };

    let default_provider = providers
        .resolve_provider(catalog.defaults().provider.as_deref())
        .id
        .clone();

    let mut table = new_table(&["ID", "LABEL", "BASE URL", "AUTH", "MODELS", "KEY HINT"]);
    for provider in providers.providers() {
        let id = if provider.id == default_provider {
            format!("{} *", provider.id)
        } else {
            provider.id.clone()
        };
        table.add_row(vec![
            Cell::new(id),
            Cell::new(&provider.label),
            Cell::new(&provider.base_url),
            Cell::new(provider.auth_header.as_str()),
            Cell::new(provider.models.len()),
            Cell::new(&provider.key_hint),
        ]);
    }

    println!("{}", table);
    println!("{}", "* default provider".dimmed());

    info!("Listed {} providers", providers.providers().len());
    Ok(())
}
