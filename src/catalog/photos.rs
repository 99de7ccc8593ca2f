//! Photo URL derivation
//!
//! Every photo identifier in a record resolves to three published files:
//!
//! ```text
//! {base}/{record_id}/{bucket}/{photo_id}.{ext}
//! ```
//!
//! The asset pipeline owns the naming; this module only builds the URLs.

use super::types::EventRecord;
use super::video;
use serde::{Deserialize, Serialize};

/// One of the three published sizes of a photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    Thumbnail,
    Medium,
    Large,
}

/// Where photo files live and how they are named
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetLayout {
    /// URL prefix for all gig assets
    pub base: String,
    /// Bucket directory for thumbnails
    pub thumb_dir: String,
    /// Bucket directory for medium images
    pub medium_dir: String,
    /// Bucket directory for large images
    pub large_dir: String,
    /// File extension, without the dot
    pub ext: String,
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self {
            base: "assets/gigs".to_string(),
            thumb_dir: "thumbs".to_string(),
            medium_dir: "1200".to_string(),
            large_dir: "2000".to_string(),
            ext: "webp".to_string(),
        }
    }
}

impl AssetLayout {
    /// Bucket directory name for a resolution
    #[must_use]
    pub fn bucket(&self, resolution: Resolution) -> &str {
        match resolution {
            Resolution::Thumbnail => &self.thumb_dir,
            Resolution::Medium => &self.medium_dir,
            Resolution::Large => &self.large_dir,
        }
    }

    /// URL of a single photo at one resolution
    #[must_use]
    pub fn photo_url(&self, record_id: &str, photo_id: &str, resolution: Resolution) -> String {
        format!(
            "{}/{}/{}/{}.{}",
            self.base.trim_end_matches('/'),
            record_id,
            self.bucket(resolution),
            photo_id,
            self.ext
        )
    }

    /// All three URLs for one photo
    #[must_use]
    pub fn photo_ref(&self, record_id: &str, photo_id: &str) -> PhotoRef {
        PhotoRef {
            thumb: self.photo_url(record_id, photo_id, Resolution::Thumbnail),
            medium: self.photo_url(record_id, photo_id, Resolution::Medium),
            large: self.photo_url(record_id, photo_id, Resolution::Large),
        }
    }

    /// Photo references for a record's whole gallery, in gallery order
    #[must_use]
    pub fn photo_refs(&self, record: &EventRecord) -> Vec<PhotoRef> {
        record
            .photos
            .iter()
            .map(|photo| self.photo_ref(&record.id, photo))
            .collect()
    }

    /// Image used for a record's grid card
    ///
    /// The cover photo thumbnail when set, otherwise the thumbnail of the first
    /// recognisable video link, otherwise `None` (placeholder).
    #[must_use]
    pub fn cover_url(&self, record: &EventRecord) -> Option<String> {
        if let Some(cover) = record.cover_photo.as_deref().filter(|c| !c.is_empty()) {
            return Some(self.photo_url(&record.id, cover, Resolution::Thumbnail));
        }

        record
            .youtube_urls
            .first()
            .and_then(|url| video::extract_youtube_id(url))
            .map(video::thumbnail_url)
    }
}

/// The three resolution-specific URLs of one photo
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotoRef {
    pub thumb: String,
    pub medium: String,
    pub large: String,
}

impl PhotoRef {
    /// URL for a resolution
    #[must_use]
    pub fn url(&self, resolution: Resolution) -> &str {
        match resolution {
            Resolution::Thumbnail => &self.thumb,
            Resolution::Medium => &self.medium,
            Resolution::Large => &self.large,
        }
    }
}
