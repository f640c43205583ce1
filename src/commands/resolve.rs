use anyhow::Result;
use colored::Colorize;
use llm_catalog::catalog::ActiveCatalog;
use llm_catalog::ModelResolver;
use tracing::info;

/// Execute the resolve command
///
/// Shows the record a lookup returns and flags when fallback kicked in
pub fn execute(catalog: &ActiveCatalog, model_id: &str, provider_id: Option<&str>) -> Result<()> {
    if let Some(providers) = catalog.as_providers() {
        let provider = providers.resolve_provider(provider_id);
        if let Some(requested) = provider_id {
            if providers.find_provider(requested).is_none() {
                println!(
                    "{} Unknown provider '{}', fell back to '{}'",
                    "!".yellow(),
                    requested,
                    provider.id
                );
            }
        }
        println!("  {}: {} ({})", "Provider".cyan(), provider.label, provider.id);
        println!("  {}: {}", "Base URL".cyan(), provider.base_url);
    }

    let model = catalog.resolve_model(model_id, provider_id);
    if catalog.find_model(model_id, provider_id).is_none() {
        println!(
            "{} Unknown model '{}', fell back to '{}'",
            "!".yellow(),
            model_id,
            model.id
        );
    }

    println!("  {}: {}", "Model".cyan(), model.id);
    println!("  {}: {}", "Label".cyan(), model.label);
    println!("  {}: {}", "Description".cyan(), model.description);
    println!(
        "  {}: {} / {} per 1M tokens",
        "Price (in/out)".cyan(),
        model.input_price_per_million,
        model.output_price_per_million
    );

    if let Some(models) = catalog.as_models() {
        println!("  {}: {}", "URL".cyan(), models.model_url(&model.id));
    }

    info!(requested = model_id, resolved = %model.id, "Model resolved");
    Ok(())
}
