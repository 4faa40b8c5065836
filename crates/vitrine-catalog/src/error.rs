//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while interpreting catalog controls.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Price band value is not of the form `min-max` or `min-`.
    #[error("Invalid price band: {0}")]
    InvalidPriceBand(String),

    /// Sort mode value is not one of the known modes.
    #[error("Unknown sort mode: {0}")]
    UnknownSortMode(String),

    /// Currency code is not supported.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}
