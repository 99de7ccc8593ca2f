//! Help overlay widget for displaying the full keybind reference

use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let [_, middle, _] = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .areas(area);

        let [_, center, _] = Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .areas(middle);
        center
    }

    fn section(&self, title: &'static str, binds: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::default(),
            Line::styled(format!("  {title}"), self.theme.heading_style()),
            Line::default(),
        ];
        lines.extend(binds.iter().map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {key:<14}"), self.theme.info_style()),
                Span::raw(*desc),
            ])
        }));
        lines
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = self.section(
            "Gig list",
            &[
                ("Type", "Search title, venue, city, country"),
                ("[ / ]", "Previous / next year"),
                ("Ctrl+Y", "Next year"),
                ("Ctrl+U", "Clear search"),
                ("Ctrl+W", "Delete word"),
                ("↑/↓ PgUp/PgDn", "Move cursor"),
                ("Enter", "Show gig details"),
            ],
        );
        lines.extend(self.section(
            "Gig details",
            &[
                ("←/→", "Move between photos"),
                ("Enter/Space", "View photo"),
                ("↑/↓", "Scroll"),
                ("o", "Open photo in system viewer"),
                ("y", "Copy photo URL"),
                ("v", "Open first video"),
                ("ESC", "Back to list"),
            ],
        ));
        lines.extend(self.section(
            "Photo viewer",
            &[
                ("←/→", "Previous / next photo"),
                ("TAB/Shift+TAB", "Move focus"),
                ("Enter", "Activate focused control"),
                ("ESC", "Close"),
                ("Click outside", "Close"),
            ],
        ));

        lines.push(Line::default());
        lines.push(Line::styled("  Press any key to close", self.theme.dimmed_style()));
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 80, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
