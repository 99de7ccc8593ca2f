//! Application state for the terminal browser
//!
//! Holds the loaded catalog, the grid filter inputs, the detail view and the
//! lightbox instance, and applies the lightbox's effects to the terminal view.

use super::widgets::LightboxLayout;
use crate::catalog::{AssetLayout, Catalog, EventRecord, video};
use crate::filters::{FilterCriteria, matching_indices};
use crate::lightbox::{
    AssetStatus, Control, Effect, Lightbox, LightboxEvent, PhotoView, Preloader,
};
use crate::ui::output::MessageLevel;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Which page of the browser is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Filterable record list
    #[default]
    Grid,
    /// One record, with the gallery tile cursor
    Detail {
        /// Index into the catalog records
        record: usize,
        photo_cursor: usize,
    },
}

/// Overlay mode on top of the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
}

/// Gallery tile that opened the lightbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoTile {
    pub record_id: String,
    pub index: usize,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
    pub created_at: Instant,
}

impl StatusMessage {
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Application state for the browser
pub struct BrowserState {
    pub catalog: Catalog,
    pub layout: AssetLayout,
    /// Catalog indices passing the current filter, in catalog order
    pub visible: Vec<usize>,
    /// Cursor position in `visible`
    pub cursor: usize,
    /// Scroll offset for the record list
    pub scroll_offset: usize,
    /// Height of the visible record list (set during render)
    pub visible_height: usize,
    pub query: String,
    /// Byte offset of the cursor within `query`, always on a char boundary
    pub query_cursor: usize,
    /// Distinct catalog years, newest first
    pub years: Vec<String>,
    /// Index into `years`; `None` means all years
    pub year: Option<usize>,
    pub view: View,
    pub mode: Mode,
    /// Scroll offset of the detail pane
    pub detail_scroll: u16,
    pub lightbox: Lightbox<PhotoTile>,
    /// Photo shown by the lightbox, set by `Show` effects
    pub photo_view: Option<PhotoView>,
    /// Focused lightbox control, set by `Focus` effects
    pub lightbox_focus: Option<Control>,
    /// Detail scrolling is frozen while the lightbox is open
    pub scroll_locked: bool,
    /// Keys go to the lightbox only
    pub keys_captured: bool,
    /// Modal frame and control hit areas from the last render
    pub lightbox_hits: Option<LightboxLayout>,
    pub messages: Vec<StatusMessage>,
    pub message_ttl: Duration,
    pub should_exit: bool,
    preloader: Arc<dyn Preloader>,
}

impl BrowserState {
    /// Create browser state over a loaded catalog
    #[must_use]
    pub fn new(catalog: Catalog, layout: AssetLayout, preloader: Arc<dyn Preloader>) -> Self {
        let years = catalog.years();
        let visible = (0..catalog.len()).collect();

        Self {
            catalog,
            layout,
            visible,
            cursor: 0,
            scroll_offset: 0,
            visible_height: 20,
            query: String::new(),
            query_cursor: 0,
            years,
            year: None,
            view: View::Grid,
            mode: Mode::Normal,
            detail_scroll: 0,
            lightbox: Lightbox::new(),
            photo_view: None,
            lightbox_focus: None,
            scroll_locked: false,
            keys_captured: false,
            lightbox_hits: None,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            should_exit: false,
            preloader,
        }
    }

    /// Start with a query already typed
    #[must_use]
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self.query_cursor = self.query.len();
        self.refilter();
        self
    }

    /// Start with a year selected; unknown years are reported and ignored
    #[must_use]
    pub fn with_year(mut self, year: &str) -> Self {
        match self.years.iter().position(|y| y == year) {
            Some(pos) => {
                self.year = Some(pos);
                self.refilter();
            }
            None => self.push_message(MessageLevel::Warning, format!("No gigs in {year}")),
        }
        self
    }

    // Filtering

    /// Criteria built from the search bar and year selector
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new()
            .with_query(self.query.as_str())
            .with_year(self.selected_year().unwrap_or_default())
    }

    #[must_use]
    pub fn selected_year(&self) -> Option<&str> {
        self.year
            .and_then(|i| self.years.get(i))
            .map(String::as_str)
    }

    /// Recompute the visible records and reset the cursor
    pub fn refilter(&mut self) {
        self.visible = matching_indices(self.catalog.records(), &self.criteria());
        self.cursor = 0;
        self.scroll_offset = 0;
        tracing::trace!(
            query = %self.query,
            year = ?self.selected_year(),
            visible = self.visible.len(),
            "refiltered"
        );
    }

    /// Step the year selector: all years, newest, ..., oldest, all years
    pub fn cycle_year(&mut self, forward: bool) {
        let n = self.years.len();
        if n == 0 {
            return;
        }
        self.year = match (self.year, forward) {
            (None, true) => Some(0),
            (None, false) => Some(n - 1),
            (Some(i), true) if i + 1 < n => Some(i + 1),
            (Some(i), false) if i > 0 => Some(i - 1),
            (Some(_), _) => None,
        };
        self.refilter();
    }

    // Grid navigation

    pub const fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    pub const fn cursor_down(&mut self) {
        if self.cursor + 1 < self.visible.len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    pub const fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    pub fn page_down(&mut self) {
        let max_cursor = self.visible.len().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height).min(max_cursor);
        self.adjust_scroll();
    }

    pub const fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    pub const fn jump_to_end(&mut self) {
        self.cursor = self.visible.len().saturating_sub(1);
        self.adjust_scroll();
    }

    const fn adjust_scroll(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.visible_height > 0 && self.cursor >= self.scroll_offset + self.visible_height {
            self.scroll_offset = self.cursor + 1 - self.visible_height;
        }
    }

    /// Record under the grid cursor
    #[must_use]
    pub fn current_record(&self) -> Option<&EventRecord> {
        let idx = *self.visible.get(self.cursor)?;
        self.catalog.records().get(idx)
    }

    // Query editing

    pub fn query_push(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
        self.refilter();
    }

    pub fn query_backspace(&mut self) {
        if let Some((pos, _)) = self.query[..self.query_cursor].char_indices().next_back() {
            self.query.remove(pos);
            self.query_cursor = pos;
            self.refilter();
        }
    }

    pub fn query_delete(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query.remove(self.query_cursor);
            self.refilter();
        }
    }

    pub fn query_cursor_left(&mut self) {
        if let Some((pos, _)) = self.query[..self.query_cursor].char_indices().next_back() {
            self.query_cursor = pos;
        }
    }

    pub fn query_cursor_right(&mut self) {
        if let Some(c) = self.query[self.query_cursor..].chars().next() {
            self.query_cursor += c.len_utf8();
        }
    }

    pub fn query_clear(&mut self) {
        self.query.clear();
        self.query_cursor = 0;
        self.refilter();
    }

    /// Delete the word before the cursor
    pub fn query_delete_word(&mut self) {
        let trimmed = self.query[..self.query_cursor].trim_end();
        let start = trimmed.rfind(' ').map_or(0, |space| space + 1);
        self.query.drain(start..self.query_cursor);
        self.query_cursor = start;
        self.refilter();
    }

    // Detail view

    /// Show the record under the grid cursor
    pub fn open_detail(&mut self) {
        if let Some(&record) = self.visible.get(self.cursor) {
            self.view = View::Detail {
                record,
                photo_cursor: 0,
            };
            self.detail_scroll = 0;
        }
    }

    /// Back to the grid, keeping the filter and cursor
    pub fn close_detail(&mut self) {
        if self.lightbox.is_open() {
            self.dispatch(LightboxEvent::Close);
        }
        self.view = View::Grid;
    }

    /// Record shown in the detail view
    #[must_use]
    pub fn detail_record(&self) -> Option<&EventRecord> {
        match self.view {
            View::Detail { record, .. } => self.catalog.records().get(record),
            View::Grid => None,
        }
    }

    #[must_use]
    pub const fn photo_cursor(&self) -> Option<usize> {
        match self.view {
            View::Detail { photo_cursor, .. } => Some(photo_cursor),
            View::Grid => None,
        }
    }

    /// Move the gallery tile cursor, clamped to the gallery
    pub fn move_photo_cursor(&mut self, forward: bool) {
        let count = self.detail_record().map_or(0, |r| r.photos.len());
        if let View::Detail { photo_cursor, .. } = &mut self.view
            && count > 0
        {
            *photo_cursor = if forward {
                (*photo_cursor + 1).min(count - 1)
            } else {
                photo_cursor.saturating_sub(1)
            };
        }
    }

    pub const fn scroll_detail(&mut self, down: bool) {
        if self.scroll_locked {
            return;
        }
        self.detail_scroll = if down {
            self.detail_scroll.saturating_add(1)
        } else {
            self.detail_scroll.saturating_sub(1)
        };
    }

    // Lightbox

    /// Open the lightbox on the detail gallery at the tile cursor
    pub fn open_lightbox(&mut self) {
        let View::Detail {
            record,
            photo_cursor,
        } = self.view
        else {
            return;
        };
        let Some(rec) = self.catalog.records().get(record) else {
            return;
        };

        let photos = self.layout.photo_refs(rec);
        if photos.is_empty() {
            self.push_message(MessageLevel::Info, "No photos for this gig".to_string());
            return;
        }

        let trigger = PhotoTile {
            record_id: rec.id.clone(),
            index: photo_cursor,
        };
        self.dispatch(LightboxEvent::Open {
            photos,
            start: photo_cursor,
            trigger: Some(trigger),
        });
    }

    /// Feed an event to the lightbox and apply its effects
    pub fn dispatch(&mut self, event: LightboxEvent<PhotoTile>) {
        let effects = self.lightbox.dispatch(event);
        self.apply_effects(effects);
    }

    /// Carry out lightbox effects in order
    pub fn apply_effects(&mut self, effects: Vec<Effect<PhotoTile>>) {
        for effect in effects {
            match effect {
                Effect::Show(view) => {
                    self.preloader.preload(&view.src);
                    self.photo_view = Some(view);
                }
                Effect::Preload(url) => self.preloader.preload(&url),
                Effect::LockScroll => self.scroll_locked = true,
                Effect::UnlockScroll => self.scroll_locked = false,
                Effect::CaptureKeys => self.keys_captured = true,
                Effect::ReleaseKeys => {
                    self.keys_captured = false;
                    self.photo_view = None;
                    self.lightbox_focus = None;
                    self.lightbox_hits = None;
                }
                Effect::Focus(control) => self.lightbox_focus = Some(control),
                Effect::RestoreFocus(tile) => self.restore_focus(&tile),
            }
        }
    }

    fn restore_focus(&mut self, tile: &PhotoTile) {
        let count = match self.detail_record() {
            Some(rec) if rec.id == tile.record_id => rec.photos.len(),
            _ => {
                tracing::debug!(record = %tile.record_id, "focus target no longer shown");
                return;
            }
        };

        if let View::Detail { photo_cursor, .. } = &mut self.view
            && tile.index < count
        {
            *photo_cursor = tile.index;
        }
    }

    /// Prefetch result for the photo the lightbox shows
    #[must_use]
    pub fn current_asset_status(&self) -> Option<AssetStatus> {
        let view = self.photo_view.as_ref()?;
        self.preloader.known_status(&view.src)
    }

    // Action targets

    /// URL of the photo in focus: the lightbox photo, else the tile under the cursor
    #[must_use]
    pub fn photo_target(&self) -> Option<String> {
        if let Some(view) = &self.photo_view {
            return Some(view.src.clone());
        }
        let record = self.detail_record()?;
        let photo = record.photos.get(self.photo_cursor()?)?;
        Some(self.layout.photo_ref(&record.id, photo).large)
    }

    /// Embed URL of the first recognised video of the record in view
    #[must_use]
    pub fn video_target(&self) -> Option<String> {
        let record = self.detail_record().or_else(|| self.current_record())?;
        video::video_ids(&record.youtube_urls)
            .next()
            .map(video::embed_url)
    }

    // Messages

    pub fn push_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
        if self.messages.len() > 50 {
            self.messages.drain(..25);
        }
    }

    /// Messages that have not expired yet
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }
}
