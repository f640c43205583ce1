use tracing::trace;

use crate::catalog::ModelResolver;
use crate::pricing::models::CostBreakdown;

/// Calculator for computing request costs based on token usage
pub struct CostCalculator<'a, R: ModelResolver + ?Sized> {
    catalog: &'a R,
}

impl<'a, R: ModelResolver + ?Sized> CostCalculator<'a, R> {
    /// Create a new cost calculator over a catalog
    pub fn new(catalog: &'a R) -> Self {
        Self { catalog }
    }

    /// Calculate cost for a request
    ///
    /// The model is resolved with fallback, so an unknown id is priced as the
    /// first model of the searched list.
    pub fn estimate_cost(
        &self,
        input_tokens: i64,
        output_tokens: i64,
        model_id: &str,
        provider_id: Option<&str>,
    ) -> CostBreakdown {
        let model = self.catalog.resolve_model(model_id, provider_id);
        let breakdown = CostBreakdown::for_model(model, input_tokens, output_tokens);

        trace!(
            model = %model.id,
            input_tokens,
            output_tokens,
            total_cost = breakdown.total_cost,
            "Estimated cost"
        );

        breakdown
    }
}
