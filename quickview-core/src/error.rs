use thiserror::Error;

/// Failures while obtaining a product or catalog from a provider.
///
/// Every variant degrades to the same "unavailable" presentation; the split
/// exists for diagnostics only.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("product `{0}` not found")]
    NotFound(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("JSON parsing error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid price amount `{0}`")]
    Amount(String),
}

/// Violations of the product model invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("option dimension `{0}` declared more than once")]
    DuplicateDimension(String),
    #[error("variant `{variant}` names {found} dimensions, product declares {expected}")]
    IncompleteVariant {
        variant: String,
        expected: usize,
        found: usize,
    },
    #[error("variant `{variant}` names undeclared dimension `{dimension}`")]
    UnknownDimension { variant: String, dimension: String },
    #[error("variant `{variant}` uses undeclared value `{value}` for `{dimension}`")]
    UnknownValue {
        variant: String,
        dimension: String,
        value: String,
    },
    #[error("variant `{0}` duplicates the selection of an earlier variant")]
    DuplicateSelection(String),
}

/// A selection change naming something the product does not declare.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown option dimension `{0}`")]
    UnknownDimension(String),
    #[error("`{value}` is not a value of `{dimension}`")]
    UnknownValue { dimension: String, value: String },
}
