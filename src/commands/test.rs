use anyhow::Result;
use colored::Colorize;
use llm_catalog::catalog::ActiveCatalog;
use llm_catalog::params::GenerationParams;
use llm_catalog::ModelResolver;
use tracing::info;

/// Execute the test command
///
/// Validates every catalog invariant and prints a summary
pub fn execute(catalog: &ActiveCatalog) -> Result<()> {
    println!("{}", "Testing catalog...".yellow());
    info!("Validating {} catalog", catalog.variant());

    catalog.validate()?;

    println!("{}", "✓ Catalog test successful".green());
    println!();

    println!("{}", "Catalog Summary:".bold());
    println!(
        "  {}: {} ({})",
        "Variant".cyan(),
        catalog.variant(),
        if catalog.is_builtin() { "built-in" } else { "file" }
    );

    if let Some(providers) = catalog.as_providers() {
        println!("  {}: {}", "Providers".cyan(), providers.providers().len());
        for provider in providers.providers() {
            let free = provider.models.iter().filter(|m| m.is_free()).count();
            println!(
                "    {} → {} models ({} free)",
                provider.id,
                provider.models.len(),
                free
            );
        }
    }
    if let Some(models) = catalog.as_models() {
        println!("  {}: {}", "Endpoint".cyan(), models.api_endpoint());
        println!("  {}: {}", "Models".cyan(), models.all_models().len());
    }
    println!();

    let defaults = catalog.defaults();
    let params = GenerationParams::from_defaults(defaults);
    let on_grid = params.clamped(catalog.ui_limits()) == params;

    println!("{}", "Defaults:".cyan());
    if let Some(provider) = &defaults.provider {
        println!("    Provider: {}", provider);
    }
    println!("    Model: {}", catalog.default_model().id);
    println!("    Temperature: {}", params.temperature);
    println!("    Max Tokens: {}", params.max_tokens);
    println!(
        "    Slider Grid: {}",
        if on_grid {
            "aligned".green()
        } else {
            "off-grid".yellow()
        }
    );

    info!("Catalog validation completed successfully");
    Ok(())
}
