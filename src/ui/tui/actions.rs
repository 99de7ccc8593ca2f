//! External actions triggered from the browser
//!
//! Opening a photo or video in the system viewer and copying a photo URL.
//! Failures never leave the browser; they become status bar messages.

use super::events::BrowserAction;
use super::state::BrowserState;
use crate::ui::output::MessageLevel;
use crate::ui::{Result, UiError};
use std::path::{Path, PathBuf};

/// Result of running an action, as shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Success(String),
    Failed(String),
}

impl ActionOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<Result<String>> for ActionOutcome {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(details) => Self::Success(details),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// What `open` should be pointed at for a photo or video URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenTarget {
    Url(String),
    File(PathBuf),
}

/// Resolve a catalog URL: absolute URLs pass through, relative asset paths
/// are looked up under `asset_root`
#[must_use]
pub fn resolve_target(url: &str, asset_root: &Path) -> OpenTarget {
    if url.contains("://") {
        OpenTarget::Url(url.to_string())
    } else {
        OpenTarget::File(asset_root.join(url.trim_start_matches('/')))
    }
}

/// Open a URL or asset in the default application
///
/// # Errors
///
/// Returns `UiError::MissingAsset` for a local file that does not exist and
/// `UiError::OpenError` if no application could be launched.
pub fn open_target(url: &str, asset_root: &Path) -> Result<String> {
    let target = match resolve_target(url, asset_root) {
        OpenTarget::Url(url) => url,
        OpenTarget::File(path) => {
            if !path.exists() {
                return Err(UiError::MissingAsset(path.display().to_string()));
            }
            path.display().to_string()
        }
    };

    open::that(&target).map_err(|source| UiError::OpenError {
        target: target.clone(),
        source,
    })?;
    Ok(format!("Opened {target}"))
}

/// Put text on the system clipboard
///
/// # Errors
///
/// Returns `UiError::ClipboardError` if the clipboard is unavailable.
pub fn copy_to_clipboard(text: &str) -> Result<String> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| UiError::ClipboardError(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| UiError::ClipboardError(e.to_string()))?;
    Ok(format!("Copied {text}"))
}

fn perform(state: &BrowserState, action: BrowserAction, asset_root: &Path) -> Result<String> {
    match action {
        BrowserAction::OpenPhoto => {
            let url = state
                .photo_target()
                .ok_or_else(|| UiError::NoTarget("no photo selected".to_string()))?;
            open_target(&url, asset_root)
        }
        BrowserAction::CopyPhotoUrl => {
            let url = state
                .photo_target()
                .ok_or_else(|| UiError::NoTarget("no photo selected".to_string()))?;
            copy_to_clipboard(&url)
        }
        BrowserAction::OpenVideo => {
            let url = state
                .video_target()
                .ok_or_else(|| UiError::NoTarget("no video for this gig".to_string()))?;
            open_target(&url, asset_root)
        }
    }
}

/// Run an action against the current browser state and report it
pub fn run_action(state: &mut BrowserState, action: BrowserAction, asset_root: &Path) -> ActionOutcome {
    let outcome = ActionOutcome::from(perform(state, action, asset_root));

    tracing::debug!(?action, ?outcome, "browser action");
    match &outcome {
        ActionOutcome::Success(text) => state.push_message(MessageLevel::Success, text.clone()),
        ActionOutcome::Failed(text) => state.push_message(MessageLevel::Error, text.clone()),
    }
    outcome
}
