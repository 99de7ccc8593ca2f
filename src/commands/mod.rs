//! Command implementations
//!
//! Each command is a module with an `execute` function that takes the parsed
//! arguments and reports through an [`OutputWriter`](crate::ui::OutputWriter).

pub mod browse;
pub mod build;
pub mod completions;
pub mod config;
pub mod list;
pub mod show;
pub mod years;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use build::execute as build;
pub use completions::execute as completions;
pub use config::execute as config;
pub use list::execute as list;
pub use show::execute as show;
pub use years::execute as years;
