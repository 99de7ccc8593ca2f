//! Record list widget for the grid view

use crate::catalog::EventRecord;
use crate::site::format::{format_date, venue_line};
use crate::site::html::{EMPTY_CATALOG, NO_MATCHES};
use crate::ui::tui::state::BrowserState;
use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

/// List of the records passing the current filter
pub struct RecordList<'a> {
    state: &'a BrowserState,
    theme: &'a Theme,
}

impl<'a> RecordList<'a> {
    #[must_use]
    pub const fn new(state: &'a BrowserState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn render_item(&self, record: &EventRecord, is_cursor: bool) -> ListItem<'static> {
        let cursor_char = if is_cursor { ">" } else { " " };
        let title_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.title_style()
        };

        let mut spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(format!("{:<18}", format_date(record)), self.theme.dimmed_style()),
            Span::styled(record.display_title().to_string(), title_style),
            Span::raw("  "),
            Span::styled(venue_line(record), self.theme.dimmed_style()),
        ];
        if record.upcoming {
            spans.push(Span::raw("  "));
            spans.push(Span::styled("Upcoming", self.theme.badge_style()));
        }

        ListItem::new(Line::from(spans))
    }
}

impl Widget for RecordList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " Gigs ({}/{}) ",
            self.state.visible.len(),
            self.state.catalog.len()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.state.visible.is_empty() {
            let message = if self.state.catalog.is_empty() {
                EMPTY_CATALOG
            } else {
                NO_MATCHES
            };
            Paragraph::new(Line::styled(message, self.theme.dimmed_style())).render(inner, buf);
            return;
        }

        let records = self.state.catalog.records();
        let start = self.state.scroll_offset;
        let end = (start + inner.height as usize).min(self.state.visible.len());

        let items: Vec<ListItem> = (start..end)
            .filter_map(|pos| {
                let record = records.get(*self.state.visible.get(pos)?)?;
                Some(self.render_item(record, pos == self.state.cursor))
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
