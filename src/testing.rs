//! Testing utilities for gigshelf
//!
//! Fixture records and photo sets shared by unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{AssetLayout, EventRecord, PhotoRef, SupportAct};
use crate::lightbox::Preloader;
use regex::Regex;
use std::sync::{LazyLock, Mutex};

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap());

/// Remove terminal colour codes, whatever `colored` decided for this process
#[must_use]
pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// A small, unsorted catalog covering every optional field
///
/// | id | date | searchable text |
/// |---|---|---|
/// | `paris-2023` | 2023-05-01 | Hall A, Paris, FR (3 photos) |
/// | `lyon-2024` | 2024-01-10 | Club B, Lyon, FR |
/// | `berlin-2022` | 2022-09-17 | "Autumn Session", Lido, Berlin, DE (1 photo) |
/// | `oslo-2024` | 2024-06-21 | Blå, Oslo, NO (upcoming) |
#[must_use]
pub fn sample_records() -> Vec<EventRecord> {
    let paris = EventRecord::new("paris-2023", "2023-05-01", "Hall A", "Paris", "FR")
        .with_photos(["p0", "p1", "p2"]);

    let lyon = EventRecord::new("lyon-2024", "2024-01-10", "Club B", "Lyon", "FR");

    let mut berlin = EventRecord::new("berlin-2022", "2022-09-17", "Lido", "Berlin", "DE")
        .with_title("Autumn Session")
        .with_photos(["solo"]);
    berlin.support_for = Some(SupportAct {
        name: "The Headliners".to_string(),
        url: "https://headliners.example".to_string(),
    });
    berlin.description = Some("Opening slot <acoustic>".to_string());
    berlin
        .credits
        .insert("Sound".to_string(), "Alex".to_string());
    berlin.youtube_urls = vec![
        "https://youtu.be/dQw4w9WgXcQ".to_string(),
        "https://example.com/not-a-video".to_string(),
    ];

    let mut oslo = EventRecord::new("oslo-2024", "2024-06-21", "Blå", "Oslo", "NO");
    oslo.upcoming = true;

    vec![paris, lyon, berlin, oslo]
}

/// `n` photo references for a record named `gig`
#[must_use]
pub fn photo_refs(n: usize) -> Vec<PhotoRef> {
    let layout = AssetLayout::default();
    (0..n)
        .map(|i| layout.photo_ref("gig", &format!("p{i}")))
        .collect()
}

/// Preloader that records every requested URL
#[derive(Debug, Default)]
pub struct RecordingPreloader {
    urls: Mutex<Vec<String>>,
}

impl RecordingPreloader {
    /// URLs requested so far, in request order
    ///
    /// # Panics
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().expect("preloader mutex poisoned").clone()
    }
}

impl Preloader for RecordingPreloader {
    fn preload(&self, url: &str) {
        if let Ok(mut urls) = self.urls.lock() {
            urls.push(url.to_string());
        }
    }
}
