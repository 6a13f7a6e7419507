use thiserror::Error;

/// Top-level error raised by quote generation.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Request was considered invalid due to error: {0}")]
    InvalidInput(#[from] serde_valid::validation::Errors),
    #[error("failed to calculate quote")]
    CalculationFailed(#[from] CatalogError),
    #[error("Quote calculation was cancelled before catalog data was loaded")]
    Cancelled,
}

/// Failure raised by a catalog store when reading catalog tables.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Catalog data was invalid: {0}")]
    InvalidData(#[from] serde_json::Error),
}
