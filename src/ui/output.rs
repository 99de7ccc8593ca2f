//! Output abstraction layer
//!
//! Commands report through an [`OutputWriter`] instead of printing directly,
//! so the same code can write to a terminal or be captured in tests.

use colored::Colorize;

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use gigshelf::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.write("2024-06-21  Blå");
/// output.success("Site built");
/// output.error("Gig not found: nope");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
///
/// In quiet mode only plain data lines and errors are written.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "⚠".yellow(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mock::MemoryWriter;

    #[test]
    fn test_stdout_writer_quiet_flag() {
        assert!(StdoutWriter::new(true).is_quiet());
        assert!(!StdoutWriter::default().is_quiet());
    }

    #[test]
    fn test_memory_writer_records_levels() {
        let writer = MemoryWriter::default();
        writer.write("line");
        writer.success("done");
        writer.error("failed");

        assert_eq!(
            writer.messages(),
            vec![
                (MessageLevel::Normal, "line".to_string()),
                (MessageLevel::Success, "done".to_string()),
                (MessageLevel::Error, "failed".to_string()),
            ]
        );
        assert_eq!(writer.lines(), vec!["line".to_string()]);
    }
}
