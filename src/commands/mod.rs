//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - providers: List providers of the multi-provider catalog
//! - models: List models with prices
//! - resolve: Show which model a lookup resolves to
//! - estimate: Estimate request cost from token counts
//! - test: Validate the selected catalog
//! - config: Configuration display and validation

pub mod config;
pub mod estimate;
pub mod models;
pub mod providers;
pub mod resolve;
pub mod test;

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

/// Table with the shared preset and a cyan header row
pub(crate) fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
    table
}
