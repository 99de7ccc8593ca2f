//! User interface layer
//!
//! Two front ends share the catalog, filter and lightbox modules:
//!
//! - **`output`** - the [`OutputWriter`] used by the plain CLI commands
//! - **`tui`** - the interactive ratatui browser hosting the lightbox
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Commands (list, show, browse)      │
//! └────────────────┬────────────────────────┘
//!                  │
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ OutputWriter  │  │ tui::BrowserApp   │
//! │ - Stdout      │  │  BrowserState     │
//! │               │  │   └─ Lightbox<T>  │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use gigshelf::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new(false);
//! output.success("Operation completed!");
//! output.warning("Be careful");
//! output.info("Additional info");
//! ```

mod error;

pub mod output;
pub mod tui;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
