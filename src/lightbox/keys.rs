//! Terminal key mapping for the lightbox

use super::state::LightboxKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl LightboxKey {
    /// Map a terminal key event to a lightbox key
    ///
    /// Returns `None` for keys the lightbox does not handle.
    #[must_use]
    pub fn from_key_event(key: &KeyEvent) -> Option<Self> {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Some(Self::Escape),
            (KeyCode::Left, _) => Some(Self::Left),
            (KeyCode::Right, _) => Some(Self::Right),
            (KeyCode::BackTab, _) => Some(Self::ShiftTab),
            (KeyCode::Tab, m) if m.contains(KeyModifiers::SHIFT) => Some(Self::ShiftTab),
            (KeyCode::Tab, _) => Some(Self::Tab),
            (KeyCode::Enter | KeyCode::Char(' '), _) => Some(Self::Enter),
            _ => None,
        }
    }
}
