//! Filter criteria
//!
//! `FilterCriteria` holds the two inputs that drive the grid view: a free-text
//! query and an optional year. It is a plain value; hosts own the widgets and
//! rebuild the criteria whenever an input changes.

use serde::{Deserialize, Serialize};

/// Current text query and year constraint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text query, matched case-insensitively
    #[serde(default)]
    pub query: String,

    /// Four-digit year, `None` for all years
    #[serde(default)]
    pub year: Option<String>,
}

impl FilterCriteria {
    /// Criteria that match every record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the year; an empty string clears it
    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        let year = year.into();
        self.year = if year.is_empty() { None } else { Some(year) };
        self
    }

    /// Lower-cased, trimmed query, or `None` when the query is blank
    #[must_use]
    pub fn needle(&self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// Year constraint as a prefix, `None` when unset
    #[must_use]
    pub fn year_prefix(&self) -> Option<&str> {
        self.year.as_deref().filter(|y| !y.is_empty())
    }

    /// Whether these criteria let every record through
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle().is_none() && self.year_prefix().is_none()
    }
}
