//! Gigshelf - A browsable catalog of concert records
//!
//! This library loads a published gig catalog, filters it by text and year,
//! drives a keyboard-accessible photo lightbox, and renders the catalog as a
//! static site or an interactive terminal browser.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod filters;
pub mod lightbox;
pub mod output;
pub mod site;
pub mod ui;

#[cfg(test)]
pub mod testing;

pub use catalog::{Catalog, EventRecord};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum GigError {
    /// Catalog could not be loaded or queried
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Static site could not be written
    #[error("Site error: {0}")]
    SiteError(#[from] site::SiteError),
    /// Terminal UI failure
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Record serialization failed
    #[error("Output error: {0}")]
    OutputError(#[from] output::OutputError),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
