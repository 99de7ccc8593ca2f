//! Output formatting for CLI display
//!
//! Renders records for the `list`, `years` and `show` commands as text lines,
//! JSON or CSV.

use crate::catalog::{AssetLayout, EventRecord, video};
use crate::config::OutputFormat;
use crate::site::format::{format_date, location_line};
use colored::Colorize;
use thiserror::Error;

/// Errors raised while serializing records
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV output was not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Format one record as a list line
#[must_use]
pub fn record_line(record: &EventRecord, quiet: bool) -> String {
    if quiet {
        return record.id.clone();
    }

    let mut line = format!(
        "  {}  {}  {} [{}]",
        record.date,
        record.display_title().bold(),
        location_line(record).dimmed(),
        record.id
    );
    if record.upcoming {
        line.push_str(&format!(" {}", "upcoming".yellow()));
    }
    line
}

/// Format a year with its record count
#[must_use]
pub fn year_with_count(year: &str, count: usize, quiet: bool) -> String {
    if quiet {
        year.to_string()
    } else {
        format!("  {year} ({count} gig(s))")
    }
}

/// Render a record set in a machine-readable or text format
///
/// # Errors
///
/// Returns `OutputError` if JSON or CSV serialization fails.
pub fn render_records(
    records: &[&EventRecord],
    format: OutputFormat,
    quiet: bool,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Text => Ok(records
            .iter()
            .map(|r| record_line(r, quiet))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Csv => to_csv(records),
    }
}

/// CSV with one row per record
///
/// # Errors
///
/// Returns `OutputError` if a row cannot be written.
pub fn to_csv(records: &[&EventRecord]) -> Result<String, OutputError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "id", "date", "title", "venue", "city", "country", "upcoming", "photos",
    ])?;

    for record in records {
        let photos = record.photos.len().to_string();
        writer.write_record([
            record.id.as_str(),
            record.date.as_str(),
            record.display_title(),
            record.venue.as_str(),
            record.city.as_str(),
            record.country.as_str(),
            if record.upcoming { "true" } else { "false" },
            photos.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| OutputError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Multi-line description of one record for `show`
#[must_use]
pub fn record_details(record: &EventRecord, layout: &AssetLayout) -> Vec<String> {
    let mut lines = vec![
        record.display_title().bold().to_string(),
        format!("  Date:    {}", format_date(record)),
        format!("  Venue:   {}", location_line(record)),
    ];

    if record.upcoming {
        lines.push(format!("  {}", "Upcoming".yellow()));
    }
    if let Some(url) = &record.venue_url {
        lines.push(format!("  Link:    {url}"));
    }
    if let Some(act) = &record.support_for {
        lines.push(format!("  Support for {} ({})", act.name, act.url));
    }
    if let Some(description) = &record.description {
        lines.push(String::new());
        lines.push(format!("  {description}"));
    }
    if !record.credits.is_empty() {
        lines.push(String::new());
        lines.push("  Credits:".to_string());
        for (role, name) in &record.credits {
            lines.push(format!("    {}: {name}", role.dimmed()));
        }
    }

    let videos: Vec<_> = video::video_ids(&record.youtube_urls).collect();
    if !videos.is_empty() {
        lines.push(String::new());
        lines.push("  Videos:".to_string());
        for id in videos {
            lines.push(format!("    {}", video::embed_url(id)));
        }
    }

    let photos = layout.photo_refs(record);
    if !photos.is_empty() {
        lines.push(String::new());
        lines.push(format!("  Photos ({}):", photos.len()));
        for photo in photos {
            lines.push(format!("    {}", photo.large));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_records, strip_ansi};

    fn records() -> Vec<EventRecord> {
        sample_records()
    }

    #[test]
    fn test_record_line_quiet_is_id() {
        let records = records();
        assert_eq!(record_line(&records[0], true), "paris-2023");
    }

    #[test]
    fn test_record_line_contents() {
        let records = records();
        let line = strip_ansi(&record_line(&records[3], false));
        assert_eq!(line, "  2024-06-21  Blå  Blå, Oslo, NO [oslo-2024] upcoming");
    }

    #[test]
    fn test_year_with_count() {
        assert_eq!(year_with_count("2024", 2, true), "2024");
        assert_eq!(year_with_count("2024", 2, false), "  2024 (2 gig(s))");
    }

    #[test]
    fn test_render_json() {
        let records = records();
        let refs: Vec<_> = records.iter().take(2).collect();
        let json = render_records(&refs, OutputFormat::Json, false).unwrap();

        let parsed: Vec<EventRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].id, "paris-2023");
    }

    #[test]
    fn test_render_csv() {
        let records = records();
        let refs: Vec<_> = records.iter().collect();
        let csv = render_records(&refs, OutputFormat::Csv, false).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], "id,date,title,venue,city,country,upcoming,photos");
        assert_eq!(lines[1], "paris-2023,2023-05-01,Hall A,Hall A,Paris,FR,false,3");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_render_text_quiet() {
        let records = records();
        let refs: Vec<_> = records.iter().take(2).collect();
        let text = render_records(&refs, OutputFormat::Text, true).unwrap();
        assert_eq!(text, "paris-2023\nlyon-2024");
    }

    #[test]
    fn test_record_details_sections() {
        let records = records();
        let lines = record_details(&records[2], &AssetLayout::default());
        let text = strip_ansi(&lines.join("\n"));

        assert!(text.starts_with("Autumn Session"));
        assert!(text.contains("Date:    17 September 2022"));
        assert!(text.contains("Support for The Headliners (https://headliners.example)"));
        assert!(text.contains("Sound: Alex"));
        assert!(text.contains("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ"));
        assert!(text.contains("Photos (1):"));
        assert!(text.contains("assets/gigs/berlin-2022/2000/solo.webp"));
    }
}
