//! Detail pane widget for one record

use crate::catalog::{AssetLayout, EventRecord, video};
use crate::site::format::{format_date, location_line};
use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Header, credits, videos and photo gallery of one record
pub struct DetailPane<'a> {
    record: &'a EventRecord,
    layout: &'a AssetLayout,
    photo_cursor: usize,
    scroll: u16,
    theme: &'a Theme,
}

impl<'a> DetailPane<'a> {
    #[must_use]
    pub const fn new(
        record: &'a EventRecord,
        layout: &'a AssetLayout,
        photo_cursor: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            record,
            layout,
            photo_cursor,
            scroll: 0,
            theme,
        }
    }

    #[must_use]
    pub const fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// Content lines, top to bottom
    #[must_use]
    pub fn lines(&self) -> Vec<Line<'static>> {
        let record = self.record;
        let mut lines = Vec::new();

        if record.upcoming {
            lines.push(Line::styled("UPCOMING", self.theme.badge_style()));
        }
        lines.push(Line::styled(
            record.display_title().to_string(),
            self.theme.title_style(),
        ));
        lines.push(Line::styled(format_date(record), self.theme.dimmed_style()));
        lines.push(Line::raw(location_line(record)));
        if let Some(url) = &record.venue_url {
            lines.push(Line::styled(url.clone(), self.theme.link_style()));
        }
        if let Some(act) = &record.support_for {
            lines.push(Line::from(vec![
                Span::raw("Support for "),
                Span::styled(act.name.clone(), self.theme.link_style()),
            ]));
        }

        if let Some(description) = &record.description {
            lines.push(Line::default());
            lines.push(Line::raw(description.clone()));
        }

        if !record.credits.is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled("Credits", self.theme.heading_style()));
            for (role, name) in &record.credits {
                lines.push(Line::from(vec![
                    Span::styled(format!("{role}: "), self.theme.dimmed_style()),
                    Span::raw(name.clone()),
                ]));
            }
        }

        let videos: Vec<_> = video::video_ids(&record.youtube_urls).collect();
        if !videos.is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled("Videos", self.theme.heading_style()));
            for id in videos {
                lines.push(Line::styled(video::embed_url(id), self.theme.link_style()));
            }
        }

        let photos = self.layout.photo_refs(record);
        if !photos.is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("Photos ({})", photos.len()),
                self.theme.heading_style(),
            ));

            let tiles: Vec<Span> = record
                .photos
                .iter()
                .enumerate()
                .flat_map(|(i, id)| {
                    let style = if i == self.photo_cursor {
                        self.theme.selected_style()
                    } else {
                        self.theme.normal_style()
                    };
                    [Span::styled(format!("[{} {id}]", i + 1), style), Span::raw(" ")]
                })
                .collect();
            lines.push(Line::from(tiles));

            if let Some(photo) = photos.get(self.photo_cursor) {
                lines.push(Line::styled(photo.thumb.clone(), self.theme.dimmed_style()));
            }
        }

        lines
    }
}

impl Widget for DetailPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(format!(" {} ", self.record.id));

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
