pub mod catalog;
pub mod config;
pub mod error;
pub mod params;
pub mod pricing;

pub use catalog::{resolve_model, ModelResolver};
pub use error::CatalogError;
pub use pricing::{estimate_cost, CostBreakdown};

use crate::config::LogFormat;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// `RUST_LOG` takes precedence over `default_level`. Output goes to stderr so
/// command output on stdout stays machine-readable.
///
/// Note: This function can only be called once.
pub fn init_tracing(default_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init(),
    }
}
