//! Terminal browser application
//!
//! Owns the terminal lifecycle and the draw/poll loop. Everything the loop
//! reacts to lives in [`BrowserState`].

use super::actions::run_action;
use super::events::{EventResult, poll_and_handle};
use super::state::{BrowserState, Mode, View};
use super::theme::Theme;
use super::widgets::{
    DETAIL_HINTS, DetailPane, GRID_HINTS, HelpBar, HelpOverlay, LIGHTBOX_HINTS, LightboxLayout,
    LightboxModal, RecordList, SearchBar, StatusBar,
};
use crate::ui::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

/// Interactive gig browser
pub struct BrowserApp {
    theme: Theme,
    /// Directory relative asset URLs resolve against
    asset_root: PathBuf,
}

impl BrowserApp {
    #[must_use]
    pub fn new(asset_root: impl Into<PathBuf>) -> Self {
        Self {
            theme: Theme::dark(),
            asset_root: asset_root.into(),
        }
    }

    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run the browser until the user quits
    ///
    /// # Errors
    ///
    /// Returns `UiError::TerminalError` if the terminal cannot be set up,
    /// drawn to or polled.
    pub fn run(&self, state: BrowserState) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal, state);

        if let Err(e) = Self::cleanup_terminal() {
            tracing::warn!("terminal cleanup failed: {e}");
        }
        result
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        mut state: BrowserState,
    ) -> Result<()> {
        while !state.should_exit {
            terminal.draw(|frame| self.render(frame, &mut state))?;

            match poll_and_handle(&mut state, Duration::from_millis(50))? {
                EventResult::Quit => state.should_exit = true,
                EventResult::Action(action) => {
                    run_action(&mut state, action, &self.asset_root);
                }
                EventResult::Continue | EventResult::Ignored => {}
            }
        }
        Ok(())
    }

    fn render(&self, frame: &mut Frame, state: &mut BrowserState) {
        let theme = &self.theme;
        let area = frame.area();
        let [search_area, content_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        state.visible_height = usize::from(content_area.height.saturating_sub(2));

        let search_bar = SearchBar::new(&state.query, state.query_cursor, theme)
            .year(state.selected_year())
            .focused(state.view == View::Grid && !state.keys_captured);
        frame.render_widget(search_bar, search_area);

        let hints = match state.view {
            View::Grid => {
                frame.render_widget(RecordList::new(state, theme), content_area);
                GRID_HINTS
            }
            View::Detail { photo_cursor, .. } => {
                if let Some(record) = state.detail_record() {
                    let pane = DetailPane::new(record, &state.layout, photo_cursor, theme)
                        .scroll(state.detail_scroll);
                    frame.render_widget(pane, content_area);
                }
                if state.keys_captured {
                    LIGHTBOX_HINTS
                } else {
                    DETAIL_HINTS
                }
            }
        };

        let indicator = format!("{} / {} gigs", state.visible.len(), state.catalog.len());
        let messages = state.active_messages();
        frame.render_widget(StatusBar::new(&messages, theme, indicator), status_area);
        frame.render_widget(HelpBar::new(hints, theme), help_area);

        if let Some(view) = &state.photo_view {
            let hits = LightboxLayout::compute(area, view.nav_visible);
            let modal = LightboxModal::new(view, &hits, theme)
                .focus(state.lightbox_focus)
                .status(state.current_asset_status());
            frame.render_widget(modal, area);
            state.lightbox_hits = Some(hits);
        }

        if state.mode == Mode::Help {
            frame.render_widget(HelpOverlay::new(theme), area);
        }
    }
}
