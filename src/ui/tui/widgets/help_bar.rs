//! Help bar widget for displaying keybind hints

use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "Enter", "ctrl+y")
    pub key: &'static str,
    /// Action description (e.g., "open", "year")
    pub action: &'static str,
}

impl KeyHint {
    #[must_use]
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Hints for the record list
pub const GRID_HINTS: &[KeyHint] = &[
    KeyHint::new("↑/↓", "navigate"),
    KeyHint::new("Enter", "details"),
    KeyHint::new("[ ]", "year"),
    KeyHint::new("ctrl+u", "clear"),
    KeyHint::new("F1", "help"),
    KeyHint::new("ESC", "quit"),
];

/// Hints for the detail view
pub const DETAIL_HINTS: &[KeyHint] = &[
    KeyHint::new("←/→", "photo"),
    KeyHint::new("Enter", "view"),
    KeyHint::new("o", "open"),
    KeyHint::new("y", "copy url"),
    KeyHint::new("v", "video"),
    KeyHint::new("ESC", "back"),
];

/// Hints while the lightbox is open
pub const LIGHTBOX_HINTS: &[KeyHint] = &[
    KeyHint::new("←/→", "prev/next"),
    KeyHint::new("TAB", "focus"),
    KeyHint::new("Enter", "activate"),
    KeyHint::new("o", "open"),
    KeyHint::new("ESC", "close"),
];

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key, self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
