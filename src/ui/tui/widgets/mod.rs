//! Ratatui widgets for the gig browser

mod detail_pane;
mod help_bar;
mod help_overlay;
mod lightbox_modal;
mod record_list;
mod search_bar;
mod status_bar;

pub use detail_pane::DetailPane;
pub use help_bar::{DETAIL_HINTS, GRID_HINTS, HelpBar, KeyHint, LIGHTBOX_HINTS};
pub use help_overlay::HelpOverlay;
pub use lightbox_modal::{Hit, LightboxLayout, LightboxModal, status_text};
pub use record_list::RecordList;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
