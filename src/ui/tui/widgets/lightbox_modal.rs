//! Lightbox modal widget
//!
//! Draws the photo the lightbox state machine reports through `Show` effects.
//! A terminal cannot show the image itself, so the modal shows its source,
//! label, position and (once prefetched) file size, with the three controls
//! along the bottom edge.

use crate::lightbox::{AssetStatus, Control, PhotoView};
use crate::ui::tui::theme::Theme;
use byte_unit::{Byte, UnitType};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Where a click landed relative to the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Control(Control),
    /// Inside the frame but not on a control
    Frame,
    /// Outside the frame
    Backdrop,
}

/// Modal frame and control hit areas for one terminal size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxLayout {
    pub frame: Rect,
    pub controls: Vec<(Control, Rect)>,
}

impl LightboxLayout {
    /// Width of each control button, including brackets
    const BUTTON_WIDTH: u16 = 12;

    /// Lay out the modal centered in `area`
    #[must_use]
    pub fn compute(area: Rect, nav_visible: bool) -> Self {
        let frame = centered_rect(80, 70, area);
        let inner = Block::default().borders(Borders::ALL).inner(frame);
        let row = Rect {
            y: inner.bottom().saturating_sub(1),
            height: inner.height.min(1),
            ..inner
        };

        let shown: &[Control] = Control::focusable(nav_visible);
        let [prev_area, close_area, next_area] = Layout::horizontal([
            Constraint::Length(Self::BUTTON_WIDTH),
            Constraint::Fill(1),
            Constraint::Length(Self::BUTTON_WIDTH),
        ])
        .areas(row);
        let close_area = Layout::horizontal([Constraint::Length(Self::BUTTON_WIDTH)])
            .flex(ratatui::layout::Flex::Center)
            .split(close_area)[0];

        let controls = shown
            .iter()
            .map(|control| {
                let rect = match control {
                    Control::Close => close_area,
                    Control::Prev => prev_area,
                    Control::Next => next_area,
                };
                (*control, rect)
            })
            .collect();

        Self { frame, controls }
    }

    /// Classify a click at terminal cell (`column`, `row`)
    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Hit {
        let pos = Position::new(column, row);
        if let Some((control, _)) = self.controls.iter().find(|(_, r)| r.contains(pos)) {
            return Hit::Control(*control);
        }
        if self.frame.contains(pos) {
            Hit::Frame
        } else {
            Hit::Backdrop
        }
    }
}

/// Calculate centered area for the modal
fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// Human-readable asset status line
#[must_use]
pub fn status_text(status: Option<AssetStatus>) -> String {
    match status {
        Some(AssetStatus::Available { bytes }) => Byte::from_u64(bytes)
            .get_appropriate_unit(UnitType::Binary)
            .to_string(),
        Some(AssetStatus::Missing) => "not found on disk".to_string(),
        Some(AssetStatus::Remote) => "remote".to_string(),
        None => "loading…".to_string(),
    }
}

/// Lightbox modal widget
pub struct LightboxModal<'a> {
    view: &'a PhotoView,
    focus: Option<Control>,
    status: Option<AssetStatus>,
    layout: &'a LightboxLayout,
    theme: &'a Theme,
}

impl<'a> LightboxModal<'a> {
    #[must_use]
    pub const fn new(view: &'a PhotoView, layout: &'a LightboxLayout, theme: &'a Theme) -> Self {
        Self {
            view,
            focus: None,
            status: None,
            layout,
            theme,
        }
    }

    #[must_use]
    pub const fn focus(mut self, focus: Option<Control>) -> Self {
        self.focus = focus;
        self
    }

    #[must_use]
    pub const fn status(mut self, status: Option<AssetStatus>) -> Self {
        self.status = status;
        self
    }

    fn button_label(control: Control) -> &'static str {
        match control {
            Control::Close => "[ × Close ]",
            Control::Prev => "[ ‹ Prev ]",
            Control::Next => "[ Next › ]",
        }
    }
}

impl Widget for LightboxModal<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let frame = self.layout.frame;
        Clear.render(frame, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(format!(" {} ", self.view.counter))
            .title_alignment(Alignment::Center);
        let inner = block.inner(frame);
        block.render(frame, buf);

        let body = vec![
            Line::default(),
            Line::styled(self.view.alt.clone(), self.theme.title_style()),
            Line::default(),
            Line::from(vec![
                Span::styled("Source  ", self.theme.dimmed_style()),
                Span::styled(self.view.src.clone(), self.theme.link_style()),
            ]),
            Line::from(vec![
                Span::styled("Size    ", self.theme.dimmed_style()),
                Span::raw(status_text(self.status)),
            ]),
        ];
        let body_area = Rect {
            height: inner.height.saturating_sub(1),
            ..inner
        };
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(body_area, buf);

        for (control, rect) in &self.layout.controls {
            let style = if self.focus == Some(*control) {
                self.theme.focused_control_style()
            } else {
                self.theme.normal_style()
            };
            Paragraph::new(Line::styled(Self::button_label(*control), style))
                .alignment(Alignment::Center)
                .render(*rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(nav_visible: bool) -> PhotoView {
        PhotoView {
            src: "assets/gigs/a/2000/p1.webp".to_string(),
            alt: "Concert photo 2".to_string(),
            counter: "2 / 3".to_string(),
            index: 1,
            len: 3,
            nav_visible,
        }
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_layout_hides_nav_for_single_photo() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(LightboxLayout::compute(area, true).controls.len(), 3);

        let single = LightboxLayout::compute(area, false);
        assert_eq!(single.controls.len(), 1);
        assert_eq!(single.controls[0].0, Control::Close);
    }

    #[test]
    fn test_hit_testing() {
        let layout = LightboxLayout::compute(Rect::new(0, 0, 100, 40), true);

        for (control, rect) in &layout.controls {
            assert_eq!(layout.hit(rect.x, rect.y), Hit::Control(*control));
        }
        assert_eq!(layout.hit(0, 0), Hit::Backdrop);
        let center = (layout.frame.x + layout.frame.width / 2, layout.frame.y + 2);
        assert_eq!(layout.hit(center.0, center.1), Hit::Frame);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(None), "loading…");
        assert_eq!(status_text(Some(AssetStatus::Missing)), "not found on disk");
        assert_eq!(status_text(Some(AssetStatus::Remote)), "remote");
        assert!(status_text(Some(AssetStatus::Available { bytes: 2048 })).contains("KiB"));
    }

    #[test]
    fn test_render_shows_counter_and_controls() {
        let area = Rect::new(0, 0, 100, 30);
        let theme = Theme::default();
        let view = view(true);
        let layout = LightboxLayout::compute(area, view.nav_visible);
        let mut buf = Buffer::empty(area);

        LightboxModal::new(&view, &layout, &theme)
            .focus(Some(Control::Close))
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("2 / 3"));
        assert!(text.contains("Concert photo 2"));
        assert!(text.contains("Prev"));
        assert!(text.contains("Next"));
        assert!(text.contains("Close"));
    }

    #[test]
    fn test_render_single_photo_has_no_nav() {
        let area = Rect::new(0, 0, 100, 30);
        let theme = Theme::default();
        let view = view(false);
        let layout = LightboxLayout::compute(area, view.nav_visible);
        let mut buf = Buffer::empty(area);

        LightboxModal::new(&view, &layout, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Close"));
        assert!(!text.contains("Prev"));
        assert!(!text.contains("Next"));
    }
}
