//! Event handling for the gig browser
//!
//! Maps keyboard and mouse input to state changes. While the lightbox has
//! captured the keyboard, keys are translated to lightbox events and nothing
//! else sees them.

use super::state::{BrowserState, Mode, View};
use super::widgets::Hit;
use crate::lightbox::{LightboxEvent, LightboxKey};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// Action that needs the outside world (system viewer, clipboard)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserAction {
    /// Open the focused photo in the system viewer
    OpenPhoto,
    /// Copy the focused photo URL
    CopyPhotoUrl,
    /// Open the first video of the record in view
    OpenVideo,
}

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Leave the browser
    Quit,
    /// Run an external action, then continue
    Action(BrowserAction),
    /// No action taken
    Ignored,
}

/// Route a key press to the active layer
pub fn handle_key(state: &mut BrowserState, key: KeyEvent) -> EventResult {
    if key.kind == KeyEventKind::Release {
        return EventResult::Ignored;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return EventResult::Quit;
    }
    if state.keys_captured {
        return handle_lightbox_key(state, key);
    }
    if state.mode == Mode::Help {
        state.mode = Mode::Normal;
        return EventResult::Continue;
    }
    if key.code == KeyCode::F(1) {
        state.mode = Mode::Help;
        return EventResult::Continue;
    }

    match state.view {
        View::Grid => handle_grid_key(state, key),
        View::Detail { .. } => handle_detail_key(state, key),
    }
}

fn handle_lightbox_key(state: &mut BrowserState, key: KeyEvent) -> EventResult {
    if let Some(lightbox_key) = LightboxKey::from_key_event(&key) {
        state.dispatch(LightboxEvent::Key(lightbox_key));
        return EventResult::Continue;
    }

    match key.code {
        KeyCode::Char('q') => {
            state.dispatch(LightboxEvent::Close);
            EventResult::Continue
        }
        KeyCode::Char('o') => EventResult::Action(BrowserAction::OpenPhoto),
        KeyCode::Char('y') => EventResult::Action(BrowserAction::CopyPhotoUrl),
        _ => EventResult::Ignored,
    }
}

fn handle_grid_key(state: &mut BrowserState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => EventResult::Quit,
        (KeyCode::Enter, _) => {
            state.open_detail();
            EventResult::Continue
        }

        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_down();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        (KeyCode::Char('y'), KeyModifiers::CONTROL) | (KeyCode::Char(']'), _) => {
            state.cycle_year(true);
            EventResult::Continue
        }
        (KeyCode::Char('['), _) => {
            state.cycle_year(false);
            EventResult::Continue
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.query_clear();
            EventResult::Continue
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
            state.query_delete_word();
            EventResult::Continue
        }

        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            if state.query_cursor == 0 {
                EventResult::Ignored
            } else {
                state.query_backspace();
                EventResult::Continue
            }
        }
        (KeyCode::Delete, _) => {
            if state.query_cursor >= state.query.len() {
                EventResult::Ignored
            } else {
                state.query_delete();
                EventResult::Continue
            }
        }
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

fn handle_detail_key(state: &mut BrowserState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => {
            state.close_detail();
            EventResult::Continue
        }
        KeyCode::Char('q') => EventResult::Quit,
        KeyCode::Char('?') => {
            state.mode = Mode::Help;
            EventResult::Continue
        }
        KeyCode::Left | KeyCode::Char('h') => {
            state.move_photo_cursor(false);
            EventResult::Continue
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.move_photo_cursor(true);
            EventResult::Continue
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.scroll_detail(false);
            EventResult::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.scroll_detail(true);
            EventResult::Continue
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.open_lightbox();
            EventResult::Continue
        }
        KeyCode::Char('o') => EventResult::Action(BrowserAction::OpenPhoto),
        KeyCode::Char('y') => EventResult::Action(BrowserAction::CopyPhotoUrl),
        KeyCode::Char('v') => EventResult::Action(BrowserAction::OpenVideo),
        _ => EventResult::Ignored,
    }
}

/// Handle mouse events
pub fn handle_mouse(state: &mut BrowserState, mouse: MouseEvent) -> EventResult {
    if state.keys_captured {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return EventResult::Ignored;
        }
        let Some(hits) = &state.lightbox_hits else {
            return EventResult::Ignored;
        };
        return match hits.hit(mouse.column, mouse.row) {
            Hit::Control(control) => {
                state.dispatch(LightboxEvent::Activate(control));
                EventResult::Continue
            }
            Hit::Backdrop => {
                state.dispatch(LightboxEvent::BackdropClick);
                EventResult::Continue
            }
            Hit::Frame => EventResult::Ignored,
        };
    }

    match (mouse.kind, state.view) {
        (MouseEventKind::ScrollUp, View::Grid) => state.cursor_up(),
        (MouseEventKind::ScrollDown, View::Grid) => state.cursor_down(),
        (MouseEventKind::ScrollUp, View::Detail { .. }) => state.scroll_detail(false),
        (MouseEventKind::ScrollDown, View::Detail { .. }) => state.scroll_detail(true),
        _ => return EventResult::Ignored,
    }
    EventResult::Continue
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut BrowserState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
