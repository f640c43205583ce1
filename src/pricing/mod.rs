pub mod calculator;
pub mod display;
pub mod models;

pub use calculator::CostCalculator;
pub use display::{format_amount, format_breakdown, format_price};
pub use models::{CostBreakdown, TOKENS_PER_MILLION};

use crate::catalog::builtin;

/// Estimate cost against the built-in multi-provider catalog
pub fn estimate_cost(
    input_tokens: i64,
    output_tokens: i64,
    model_id: &str,
    provider_id: Option<&str>,
) -> CostBreakdown {
    CostCalculator::new(builtin()).estimate_cost(input_tokens, output_tokens, model_id, provider_id)
}
