//! Browse command - interactive terminal browser

use crate::{
    GigError,
    catalog::Catalog,
    config::GigshelfConfig,
    lightbox::AssetPrefetcher,
    ui::tui::{BrowserApp, BrowserState},
};
use std::sync::Arc;

type Result<T> = std::result::Result<T, GigError>;

/// Build the initial browser state from the command line
#[must_use]
pub fn initial_state(
    catalog: Catalog,
    config: &GigshelfConfig,
    query: Option<&str>,
    year: Option<&str>,
) -> BrowserState {
    let preloader = Arc::new(AssetPrefetcher::new(&config.asset_root));
    let mut state = BrowserState::new(catalog, config.assets.clone(), preloader);

    if let Some(query) = query {
        state = state.with_query(query);
    }
    if let Some(year) = year {
        state = state.with_year(year);
    }
    state
}

/// Execute the browse command
///
/// # Errors
/// Returns an error if the terminal cannot be driven.
pub fn execute(
    catalog: Catalog,
    config: &GigshelfConfig,
    query: Option<&str>,
    year: Option<&str>,
) -> Result<()> {
    tracing::debug!(records = catalog.len(), ?query, ?year, "starting browser");
    let state = initial_state(catalog, config, query, year);
    BrowserApp::new(&config.asset_root).run(state)?;
    Ok(())
}
