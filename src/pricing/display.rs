use crate::catalog::CostDisplay;
use crate::pricing::models::CostBreakdown;

/// Render an amount with the configured precision and currency
pub fn format_amount(display: &CostDisplay, value: f64) -> String {
    format!(
        "{:.*} {}",
        display.decimal_places as usize,
        value,
        display.currency
    )
}

/// Rendered (input, output, total) amounts
pub fn format_breakdown(display: &CostDisplay, breakdown: &CostBreakdown) -> (String, String, String) {
    (
        format_amount(display, breakdown.input_cost),
        format_amount(display, breakdown.output_cost),
        format_amount(display, breakdown.total_cost),
    )
}

/// Render a per-million price, e.g. `0.59 USD/M`
pub fn format_price(display: &CostDisplay, price_per_million: f64) -> String {
    format!("{} {}/M", trim_price(price_per_million), display.currency)
}

fn trim_price(value: f64) -> String {
    let rendered = format!("{:.4}", value);
    let trimmed = rendered.trim_end_matches('0');
    match trimmed.strip_suffix('.') {
        Some(whole) => format!("{}.00", whole),
        None if trimmed.split('.').nth(1).map_or(0, str::len) == 1 => format!("{}0", trimmed),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_default_precision() {
        let display = CostDisplay::default();
        assert_eq!(format_amount(&display, 0.045), "0.045000 USD");
        assert_eq!(format_amount(&display, 0.0), "0.000000 USD");
    }

    #[test]
    fn test_format_amount_rounds_for_display_only() {
        let display = CostDisplay {
            decimal_places: 2,
            currency: "EUR".to_string(),
        };
        assert_eq!(format_amount(&display, 1.234), "1.23 EUR");
        assert_eq!(format_amount(&display, 0.0), "0.00 EUR");
    }

    #[test]
    fn test_format_breakdown() {
        let display = CostDisplay::default();
        let breakdown = CostBreakdown {
            input_cost: 0.5,
            output_cost: 0.25,
            total_cost: 0.75,
        };
        let (input, output, total) = format_breakdown(&display, &breakdown);
        assert_eq!(input, "0.500000 USD");
        assert_eq!(output, "0.250000 USD");
        assert_eq!(total, "0.750000 USD");
    }

    #[test]
    fn test_format_price() {
        let display = CostDisplay::default();
        assert_eq!(format_price(&display, 0.59), "0.59 USD/M");
        assert_eq!(format_price(&display, 0.075), "0.075 USD/M");
        assert_eq!(format_price(&display, 5.0), "5.00 USD/M");
        assert_eq!(format_price(&display, 0.0), "0.00 USD/M");
        assert_eq!(format_price(&display, 0.2), "0.20 USD/M");
    }
}
