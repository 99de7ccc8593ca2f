//! The loaded record collection
//!
//! A [`Catalog`] is built once per run from the published JSON document and is
//! read-only afterwards. Loading validates every record date and sorts the
//! collection newest first; every view over it (filtering, year listing,
//! detail lookup) borrows the records without changing them.
//!
//! # Examples
//!
//! ```
//! use gigshelf::catalog::Catalog;
//!
//! let json = r#"{ "gigs": [
//!     { "id": "a", "date": "2023-05-01", "venue": "Hall A", "city": "Paris", "country": "FR" },
//!     { "id": "b", "date": "2024-01-10", "venue": "Club B", "city": "Lyon", "country": "FR" }
//! ] }"#;
//!
//! let catalog = Catalog::from_json(json).unwrap();
//! assert_eq!(catalog.records()[0].id, "b");
//! assert_eq!(catalog.find("a").unwrap().venue, "Hall A");
//! ```

pub mod error;
pub mod photos;
pub mod types;
pub mod video;

pub use error::CatalogError;
pub use photos::{AssetLayout, PhotoRef, Resolution};
pub use types::{CatalogDocument, EventRecord, SupportAct};

use crate::filters;
use std::fs;
use std::path::Path;

/// Immutable, date-descending collection of event records
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<EventRecord>,
}

impl Catalog {
    /// Build a catalog from already-parsed records
    ///
    /// Records are sorted by date, newest first. Records sharing a date keep
    /// their input order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidDate` if any record date is not `YYYY-MM-DD`.
    pub fn new(mut records: Vec<EventRecord>) -> Result<Self, CatalogError> {
        if let Some(bad) = records.iter().find(|r| r.parsed_date().is_none()) {
            return Err(CatalogError::InvalidDate {
                id: bad.id.clone(),
                date: bad.date.clone(),
            });
        }

        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(Self { records })
    }

    /// Parse a catalog document
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` for malformed JSON or a document
    /// without a `gigs` field, and `CatalogError::InvalidDate` for bad dates.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.gigs)
    }

    /// Read and parse the catalog document at `path`
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ReadError` if the file cannot be read, otherwise
    /// the errors of [`Catalog::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            records = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// All records, newest first
    #[must_use]
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Look up a record by identifier
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no record has this identifier.
    pub fn find(&self, id: &str) -> Result<&EventRecord, CatalogError> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Distinct years present in the catalog, newest first
    #[must_use]
    pub fn years(&self) -> Vec<String> {
        filters::available_years(&self.records)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
