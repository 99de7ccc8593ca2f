//! In-memory output writer for testing

use super::output::{MessageLevel, OutputWriter};
use std::sync::Mutex;

/// Writer that keeps every message instead of printing it
#[derive(Debug, Default)]
pub struct MemoryWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl MemoryWriter {
    /// Every message written so far, in order
    ///
    /// # Panics
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.lock().expect("writer mutex poisoned").clone()
    }

    /// Only the plain data lines
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(level, _)| *level == MessageLevel::Normal)
            .map(|(_, text)| text)
            .collect()
    }

    /// Whether any message of `level` contains `needle`
    #[must_use]
    pub fn contains(&self, level: MessageLevel, needle: &str) -> bool {
        self.messages()
            .iter()
            .any(|(l, text)| *l == level && text.contains(needle))
    }

    fn push(&self, level: MessageLevel, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((level, message.to_string()));
        }
    }
}

impl OutputWriter for MemoryWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}
