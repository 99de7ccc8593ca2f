//! Catalog-specific error types
//!
//! Errors fall into two groups:
//!
//! - **Load failures** (`ReadError`, `ParseError`, `InvalidDate`): the record
//!   collection could not be produced at all. There is no partial recovery.
//! - **`NotFound`**: the collection loaded fine but has no record with the
//!   requested identifier.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog-specific errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data file could not be read
    #[error("Could not read gig data from {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a valid catalog document
    #[error("Could not parse gig data: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A record carries a date that is not `YYYY-MM-DD`
    #[error("Record '{id}' has an invalid date: '{date}'")]
    InvalidDate { id: String, date: String },

    /// No record with the requested identifier
    #[error("Gig not found: {0}")]
    NotFound(String),
}

impl CatalogError {
    /// Whether this error means the catalog could not be loaded
    #[must_use]
    pub const fn is_load_failure(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
