//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal could not be set up, drawn or restored
    #[error("Terminal error: {0}")]
    TerminalError(#[from] std::io::Error),

    /// System clipboard is unavailable or rejected the text
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// System viewer could not be launched
    #[error("Could not open {target}: {source}")]
    OpenError {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// Asset file is not on disk
    #[error("Not found: {0}")]
    MissingAsset(String),

    /// No photo or video is under the cursor
    #[error("Nothing to act on: {0}")]
    NoTarget(String),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
