//! Interactive terminal browser
//!
//! A ratatui front end over the catalog: a filterable gig list, a detail
//! view per gig, and the photo lightbox as a modal on top of the gallery.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │               BrowserApp                 │
//! │        (terminal + draw/poll loop)       │
//! └───────────────────┬──────────────────────┘
//!                     │
//!       ┌─────────────┼──────────────┐
//!       ▼             ▼              ▼
//! ┌───────────┐ ┌────────────┐ ┌───────────┐
//! │  events   │ │BrowserState│ │  widgets  │
//! │ (input →  │ │ filter +   │ │ (ratatui) │
//! │  state)   │ │ Lightbox<T>│ │           │
//! └───────────┘ └────────────┘ └───────────┘
//! ```
//!
//! Lightbox effects are applied by [`BrowserState::apply_effects`]: `Show`
//! updates the modal, `LockScroll` freezes the detail pane, `CaptureKeys`
//! routes every key to the lightbox and `RestoreFocus` moves the gallery
//! cursor back to the opening tile.

mod actions;
mod app;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use actions::{ActionOutcome, copy_to_clipboard, open_target};
pub use app::BrowserApp;
pub use events::{BrowserAction, EventResult, handle_key, handle_mouse};
pub use state::{BrowserState, Mode, PhotoTile, StatusMessage, View};
pub use theme::Theme;
