use clap::{Parser, Subcommand};
use llm_catalog::config::CatalogVariant;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "llm-catalog", version, about = "AI model catalog and cost estimator")]
pub struct Cli {
    /// Configuration file path (defaults to ./llm-catalog.toml when present)
    #[arg(short, long, global = true, env = "LLM_CATALOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog variant, overriding the configuration
    #[arg(long, value_enum, global = true)]
    pub variant: Option<CatalogVariant>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List providers (multi-provider catalog only)
    Providers,

    /// List models with their prices (default)
    Models {
        /// Provider to list models for
        #[arg(short, long)]
        provider: Option<String>,
    },

    /// Show the model a lookup resolves to
    Resolve {
        /// Model id
        model: String,

        /// Provider id
        #[arg(short, long)]
        provider: Option<String>,
    },

    /// Estimate the cost of a request from token counts
    Estimate {
        /// Input (prompt) tokens
        #[arg(allow_negative_numbers = true)]
        input_tokens: i64,

        /// Output (completion) tokens
        #[arg(allow_negative_numbers = true)]
        output_tokens: i64,

        /// Model id (defaults to the catalog default)
        #[arg(short, long)]
        model: Option<String>,

        /// Provider id (defaults to the catalog default)
        #[arg(short, long)]
        provider: Option<String>,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the selected catalog
    Test,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Models if none provided
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Models { provider: None })
    }
}
