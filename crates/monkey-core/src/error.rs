//! Catalog error types following panic-free policy.

use thiserror::Error;

/// Errors that can occur in catalog operations.
///
/// Both variants are recoverable; front ends report them and carry on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No record matches the requested name (or the name was blank)
    #[error("No monkey found with name '{name}'")]
    NotFound { name: String },

    /// Random selection on a catalog with no records
    #[error("No monkeys are available")]
    EmptyCatalog,
}

impl CatalogError {
    /// Builds a `NotFound` for the name as the caller supplied it.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
