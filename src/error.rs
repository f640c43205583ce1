use thiserror::Error;

/// Catalog construction, loading and validation errors
///
/// Lookups and cost estimation never fail; these only surface when a catalog
/// is built, read from disk or checked against its invariants.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog declares no providers (or no models in the single-provider variant)
    #[error("Catalog must declare at least one entry")]
    EmptyCatalog,
    /// Provider declares no models
    #[error("Provider '{0}' declares no models")]
    EmptyProvider(String),
    /// Identifier is empty
    #[error("Empty {kind} identifier at position {index}")]
    EmptyId { kind: &'static str, index: usize },
    /// Provider identifier appears more than once
    #[error("Duplicate provider id: {0}")]
    DuplicateProvider(String),
    /// Model identifier appears more than once in its scope
    #[error("Duplicate model id '{model}' in {scope}")]
    DuplicateModel { scope: String, model: String },
    /// Price is negative or not a finite number
    #[error("Invalid {field} for model '{model}': {value}")]
    InvalidPrice {
        model: String,
        field: &'static str,
        value: f64,
    },
    /// Defaults reference an entry that does not exist
    #[error("Default {kind} '{id}' does not resolve to a catalog entry")]
    UnknownDefault { kind: &'static str, id: String },
    /// UI slider range is inverted, non-finite or has a negative step
    #[error("Invalid UI range for {0}")]
    InvalidUiRange(&'static str),
    /// Cost display settings cannot be rendered
    #[error("Invalid cost display: {0}")]
    InvalidCostDisplay(String),
    /// Catalog file could not be read
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    /// Catalog file is not valid TOML for the expected variant
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

impl CatalogError {
    /// Short machine-readable name for the error kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::EmptyCatalog => "empty_catalog",
            Self::EmptyProvider(_) => "empty_provider",
            Self::EmptyId { .. } => "empty_id",
            Self::DuplicateProvider(_) => "duplicate_provider",
            Self::DuplicateModel { .. } => "duplicate_model",
            Self::InvalidPrice { .. } => "invalid_price",
            Self::UnknownDefault { .. } => "unknown_default",
            Self::InvalidUiRange(_) => "invalid_ui_range",
            Self::InvalidCostDisplay(_) => "invalid_cost_display",
            Self::Io(_) => "io_error",
            Self::Parse(_) => "parse_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CatalogError::DuplicateModel {
            scope: "provider 'groq'".to_string(),
            model: "gemma2-9b-it".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Duplicate model id 'gemma2-9b-it' in provider 'groq'"
        );
    }

    #[test]
    fn test_error_kind_name() {
        assert_eq!(CatalogError::EmptyCatalog.kind_name(), "empty_catalog");
        assert_eq!(
            CatalogError::EmptyProvider("groq".to_string()).kind_name(),
            "empty_provider"
        );
    }

    #[test]
    fn test_parse_error_conversion() {
        let err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let error: CatalogError = err.into();
        assert!(error.to_string().starts_with("Failed to parse catalog"));
    }
}
