//! Search bar widget with the year selector

use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with cursor and the selected year
pub struct SearchBar<'a> {
    query: &'a str,
    /// Byte offset of the cursor in `query`
    cursor: usize,
    year: Option<&'a str>,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> SearchBar<'a> {
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            year: None,
            theme,
            focused: true,
        }
    }

    /// Show the selected year, `None` for all years
    #[must_use]
    pub const fn year(mut self, year: Option<&'a str>) -> Self {
        self.year = year;
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let year_label = format!(" Year: {} ", self.year.unwrap_or("All years"));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search ")
            .title(Line::from(year_label).alignment(Alignment::Right));

        let inner = block.inner(area);
        block.render(area, buf);

        let caret = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let mut spans = vec![Span::styled("Search gigs:", self.theme.dimmed_style()), Span::raw(" ")];

        let split = self.cursor.min(self.query.len());
        if self.query.is_char_boundary(split) {
            let (before, after) = self.query.split_at(split);
            spans.push(Span::raw(before));
            spans.push(caret);
            spans.push(Span::raw(after));
        } else {
            spans.push(Span::raw(self.query));
            spans.push(caret);
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
