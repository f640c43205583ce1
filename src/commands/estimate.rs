use anyhow::Result;
use colored::Colorize;
use llm_catalog::catalog::ActiveCatalog;
use llm_catalog::config::Config;
use llm_catalog::pricing::{format_breakdown, CostBreakdown};
use llm_catalog::ModelResolver;
use serde::Serialize;
use tracing::info;

/// Arguments of the estimate command
#[derive(Debug, Clone)]
pub struct EstimateArgs {
    pub input_tokens: i64,
    pub output_tokens: i64,
    pub model: Option<String>,
    pub provider: Option<String>,
    pub json: bool,
}

/// Estimate as printed by `--json`
#[derive(Debug, Serialize)]
pub struct EstimateReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    pub model: String,
    pub input_tokens: i64,
    pub output_tokens: i64,
    #[serde(flatten)]
    pub cost: CostBreakdown,
    pub currency: String,
}

/// Resolve the model (falling back to catalog defaults) and price the tokens
pub fn build_report(catalog: &ActiveCatalog, cfg: &Config, args: &EstimateArgs) -> EstimateReport {
    let defaults = catalog.defaults();
    let model_id = args.model.as_deref().unwrap_or(&defaults.model);
    let provider_id = args.provider.as_deref().or(defaults.provider.as_deref());

    let model = catalog.resolve_model(model_id, provider_id);
    let cost = CostBreakdown::for_model(model, args.input_tokens, args.output_tokens);
    let provider = catalog
        .as_providers()
        .map(|p| p.resolve_provider(provider_id).id.clone());

    EstimateReport {
        provider,
        model: model.id.clone(),
        input_tokens: args.input_tokens,
        output_tokens: args.output_tokens,
        cost,
        currency: cfg.cost.apply(catalog.cost_display()).currency,
    }
}

/// Execute the estimate command
pub fn execute(catalog: &ActiveCatalog, cfg: &Config, args: &EstimateArgs) -> Result<()> {
    let report = build_report(catalog, cfg, args);
    info!(
        model = %report.model,
        total_cost = report.cost.total_cost,
        "Cost estimated"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let display = cfg.cost.apply(catalog.cost_display());
    let (input, output, total) = format_breakdown(&display, &report.cost);

    match &report.provider {
        Some(provider) => println!("{} {} / {}", "Estimate for".bold(), provider, report.model),
        None => println!("{} {}", "Estimate for".bold(), report.model),
    }
    println!(
        "  {}: {} tokens → {}",
        "Input".cyan(),
        format_tokens(report.input_tokens),
        input
    );
    println!(
        "  {}: {} tokens → {}",
        "Output".cyan(),
        format_tokens(report.output_tokens),
        output
    );
    println!("  {}: {}", "Total".green().bold(), total);

    Ok(())
}

/// Compact token count, e.g. 1.5M or 250.0K
fn format_tokens(n: i64) -> String {
    if n.abs() >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n.abs() >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}
