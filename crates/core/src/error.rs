//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog layers.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// `NotFound` and `Validation` come from request input (unknown slug,
/// malformed query parameter). `InvariantViolation` comes from store data
/// that breaks a catalog invariant, such as a product whose category is
/// missing; the detail handler surfaces it as a server error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A requested resource was not found (unknown slug).
    #[error("not found: {0}")]
    NotFound(String),

    /// A value failed validation (e.g. malformed query parameter).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Stored data violates a catalog invariant.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl CatalogError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
