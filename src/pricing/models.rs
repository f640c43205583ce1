use serde::Serialize;

use crate::catalog::Model;

/// Tokens per pricing unit
pub const TOKENS_PER_MILLION: f64 = 1_000_000.0;

/// Cost breakdown for a request
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub input_cost: f64,
    pub output_cost: f64,
    pub total_cost: f64,
}

impl CostBreakdown {
    /// Create a zero-cost breakdown
    pub fn zero() -> Self {
        Self::default()
    }

    /// Price token counts against a model's per-million rates
    ///
    /// Token counts are not validated; negative counts yield negative costs.
    /// No rounding is applied.
    pub fn for_model(model: &Model, input_tokens: i64, output_tokens: i64) -> Self {
        let mut breakdown = Self {
            input_cost: (input_tokens as f64 / TOKENS_PER_MILLION) * model.input_price_per_million,
            output_cost: (output_tokens as f64 / TOKENS_PER_MILLION)
                * model.output_price_per_million,
            total_cost: 0.0,
        };
        breakdown.calculate_total();
        breakdown
    }

    /// Calculate total cost from components
    pub fn calculate_total(&mut self) {
        self.total_cost = self.input_cost + self.output_cost;
    }
}
