//! Record types for the concert catalog
//!
//! These types mirror the published `gigs.json` document. Field names are
//! camelCase on the wire and snake_case in Rust.
//!
//! # Types
//!
//! - **`EventRecord`**: One catalogued gig with metadata, photos and video links
//! - **`SupportAct`**: The headline act a gig was supporting, with a link
//! - **`CatalogDocument`**: The top-level document wrapper (`{ "gigs": [...] }`)

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Date format used by the `date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Headline act a gig was played in support of
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportAct {
    /// Display name of the headline act
    pub name: String,
    /// Link to the headline act
    pub url: String,
}

/// A single catalogued concert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Unique opaque identifier, also used in asset paths
    pub id: String,
    /// ISO `YYYY-MM-DD` date
    pub date: String,
    /// Optional display title, falls back to the venue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub venue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_url: Option<String>,
    pub city: String,
    #[serde(default)]
    pub country: String,
    /// Photo identifiers in gallery order
    #[serde(default)]
    pub photos: Vec<String>,
    /// Photo used for the grid card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_photo: Option<String>,
    #[serde(default)]
    pub upcoming: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_for: Option<SupportAct>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Role → name pairs, e.g. `"Sound": "Alex"`, in document order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub credits: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub youtube_urls: Vec<String>,
}

impl EventRecord {
    /// Create a record with the required fields set and everything else empty
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        venue: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            title: None,
            venue: venue.into(),
            venue_url: None,
            city: city.into(),
            country: country.into(),
            photos: Vec::new(),
            cover_photo: None,
            upcoming: false,
            support_for: None,
            description: None,
            credits: IndexMap::new(),
            youtube_urls: Vec::new(),
        }
    }

    /// Set the display title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the photo identifiers
    #[must_use]
    pub fn with_photos<I, S>(mut self, photos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.photos = photos.into_iter().map(Into::into).collect();
        self
    }

    /// Title shown for this record (`title`, or `venue` when unset or blank)
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.venue)
    }

    /// Year bucket of the record (first four characters of `date`)
    #[must_use]
    pub fn year(&self) -> &str {
        self.date.get(..4).unwrap_or(&self.date)
    }

    /// Parse `date` as a calendar date
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

/// Top-level shape of the published data file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub gigs: Vec<EventRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_falls_back_to_venue() {
        let record = EventRecord::new("a", "2023-05-01", "Hall A", "Paris", "FR");
        assert_eq!(record.display_title(), "Hall A");

        let titled = record.clone().with_title("Spring Tour");
        assert_eq!(titled.display_title(), "Spring Tour");

        let blank = record.with_title("");
        assert_eq!(blank.display_title(), "Hall A");
    }

    #[test]
    fn test_year_and_parsed_date() {
        let record = EventRecord::new("a", "2023-05-01", "Hall A", "Paris", "FR");
        assert_eq!(record.year(), "2023");
        assert_eq!(
            record.parsed_date(),
            NaiveDate::from_ymd_opt(2023, 5, 1)
        );

        let broken = EventRecord::new("b", "soon", "Club", "Lyon", "FR");
        assert!(broken.parsed_date().is_none());
    }

    #[test]
    fn test_deserialize_camel_case_fields() {
        let json = r#"{
            "id": "g1",
            "date": "2024-01-10",
            "venue": "Club B",
            "venueUrl": "https://club.example",
            "city": "Lyon",
            "country": "FR",
            "photos": ["p1", "p2"],
            "coverPhoto": "p1",
            "upcoming": true,
            "supportFor": { "name": "Headliner", "url": "https://band.example" },
            "credits": { "Sound": "Alex" },
            "youtubeUrls": ["https://youtu.be/dQw4w9WgXcQ"]
        }"#;

        let record: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.venue_url.as_deref(), Some("https://club.example"));
        assert_eq!(record.photos, vec!["p1", "p2"]);
        assert_eq!(record.cover_photo.as_deref(), Some("p1"));
        assert!(record.upcoming);
        assert_eq!(record.support_for.unwrap().name, "Headliner");
        assert_eq!(record.credits.get("Sound").map(String::as_str), Some("Alex"));
        assert_eq!(record.youtube_urls.len(), 1);
    }

    #[test]
    fn test_credits_keep_document_order() {
        let json = r#"{
            "id": "g3", "date": "2021-01-01", "venue": "Hall", "city": "Rome",
            "credits": { "Sound": "Alex", "Lights": "Sam", "Crew": "Jo" }
        }"#;
        let record: EventRecord = serde_json::from_str(json).unwrap();
        let roles: Vec<&str> = record.credits.keys().map(String::as_str).collect();
        assert_eq!(roles, vec!["Sound", "Lights", "Crew"]);

        let out = serde_json::to_string(&record).unwrap();
        assert!(out.find("Sound").unwrap() < out.find("Lights").unwrap());
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{ "id": "g2", "date": "2022-02-02", "venue": "Pub", "city": "Oslo" }"#;
        let record: EventRecord = serde_json::from_str(json).unwrap();
        assert!(record.title.is_none());
        assert!(record.country.is_empty());
        assert!(record.photos.is_empty());
        assert!(!record.upcoming);
        assert!(record.credits.is_empty());
    }
}
