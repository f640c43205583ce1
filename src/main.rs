use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use llm_catalog::{catalog, config, init_tracing};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // Configuration decides the log level, so it loads before tracing starts
    let mut cfg = config::load_config(args.config.as_deref())?;
    if let Some(variant) = args.variant {
        cfg.catalog.variant = variant;
    }

    init_tracing(&cfg.logging.level, cfg.logging.format);

    // Config and version commands don't need a catalog
    let load_catalog = || catalog::load_catalog(&cfg.catalog);

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Providers => commands::providers::execute(&load_catalog()?)?,
        cli::Commands::Models { provider } => {
            commands::models::execute(&load_catalog()?, &cfg, provider.as_deref())?;
        }
        cli::Commands::Resolve { model, provider } => {
            commands::resolve::execute(&load_catalog()?, &model, provider.as_deref())?;
        }
        cli::Commands::Estimate {
            input_tokens,
            output_tokens,
            model,
            provider,
            json,
        } => {
            let estimate_args = commands::estimate::EstimateArgs {
                input_tokens,
                output_tokens,
                model,
                provider,
                json,
            };
            commands::estimate::execute(&load_catalog()?, &cfg, &estimate_args)?;
        }
        cli::Commands::Test => commands::test::execute(&load_catalog()?)?,
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
            cli::ConfigCommands::Validate => commands::config::validate(&cfg)?,
        },
        cli::Commands::Version => {
            println!("LLM Catalog v{}", env!("CARGO_PKG_VERSION"));
            println!("Rust {}", env!("CARGO_PKG_RUST_VERSION"));
        }
    }

    Ok(())
}
