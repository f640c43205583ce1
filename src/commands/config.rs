use anyhow::Result;
use colored::Colorize;
use llm_catalog::config::{self, Config};
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration (file + environment + CLI overrides)
pub fn show(cfg: &Config) -> Result<()> {
    info!("Displaying effective configuration");

    println!("{}", "Current Configuration:".green().bold());
    println!();

    // Serialize to TOML format
    let toml_string = toml::to_string_pretty(cfg)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
pub fn validate(cfg: &Config) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration");

    config::validate_config(cfg)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Catalog: {}", describe_catalog_source(cfg));
    println!(
        "  Cost Display: {} decimals, {}",
        cfg.cost
            .decimal_places
            .map_or_else(|| "catalog".to_string(), |d| d.to_string()),
        cfg.cost.currency.as_deref().unwrap_or("catalog currency")
    );
    println!("  Log Level: {}", cfg.logging.level);

    info!("Configuration validation successful");
    Ok(())
}

fn describe_catalog_source(cfg: &Config) -> String {
    match &cfg.catalog.path {
        Some(path) => format!("{} from {}", cfg.catalog.variant, path.display()),
        None => format!("{} (built-in)", cfg.catalog.variant),
    }
}
