//! Adjacent-image preloading
//!
//! Preloading is a performance hint. A [`Preloader`] receives the URLs from
//! [`Effect::Preload`](super::Effect::Preload) and starts work in the
//! background; nothing waits for it, nothing retries it, and its result never
//! feeds back into the lightbox state.

use moka::sync::Cache;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Sink for preload requests
pub trait Preloader: Send + Sync {
    /// Start loading `url`; must return without waiting for completion
    fn preload(&self, url: &str);

    /// Result of an earlier preload, if the sink keeps one
    fn known_status(&self, _url: &str) -> Option<AssetStatus> {
        None
    }
}

/// Preloader that drops every request
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPreloader;

impl Preloader for NoopPreloader {
    fn preload(&self, _url: &str) {}
}

/// What a prefetch found for an asset URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    /// Local file exists
    Available { bytes: u64 },
    /// Local file does not exist
    Missing,
    /// URL is not a local asset (http/https)
    Remote,
}

/// Prefetcher for locally published assets
///
/// Resolves asset URLs against a root directory on a rayon worker and keeps
/// the result in a moka cache, so the viewer can show file sizes without
/// touching the disk on the UI thread.
#[derive(Clone)]
pub struct AssetPrefetcher {
    root: PathBuf,
    cache: Cache<String, AssetStatus>,
}

impl AssetPrefetcher {
    /// Create a prefetcher rooted at the published site directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_cache_config(root, Duration::from_secs(300), 512)
    }

    /// Create a prefetcher with custom cache settings
    #[must_use]
    pub fn with_cache_config(root: impl Into<PathBuf>, ttl: Duration, max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .time_to_live(ttl)
            .max_capacity(max_capacity)
            .build();

        Self {
            root: root.into(),
            cache,
        }
    }

    /// Cached status of an asset, if a prefetch has completed
    #[must_use]
    pub fn status(&self, url: &str) -> Option<AssetStatus> {
        self.cache.get(url)
    }

    /// Resolve an asset on the calling thread and cache the result
    pub fn prefetch_now(&self, url: &str) -> AssetStatus {
        let status = resolve(&self.root, url);
        self.cache.insert(url.to_string(), status);
        status
    }

    /// Number of cached entries
    #[must_use]
    pub fn cached_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

impl Preloader for AssetPrefetcher {
    fn preload(&self, url: &str) {
        if self.cache.contains_key(url) {
            return;
        }

        let cache = self.cache.clone();
        let root = self.root.clone();
        let url = url.to_string();
        rayon::spawn(move || {
            let status = resolve(&root, &url);
            tracing::trace!(%url, ?status, "prefetched asset");
            cache.insert(url, status);
        });
    }

    fn known_status(&self, url: &str) -> Option<AssetStatus> {
        self.status(url)
    }
}

/// Look up an asset URL relative to `root`
#[must_use]
pub fn resolve(root: &Path, url: &str) -> AssetStatus {
    if url.starts_with("http://") || url.starts_with("https://") {
        return AssetStatus::Remote;
    }

    match fs::metadata(root.join(url.trim_start_matches('/'))) {
        Ok(meta) if meta.is_file() => AssetStatus::Available { bytes: meta.len() },
        _ => AssetStatus::Missing,
    }
}
