//! Text formatting shared by the site renderer and the terminal views

use crate::catalog::EventRecord;

/// Long-form date, e.g. `1 May 2023`
///
/// Falls back to the raw string if the date does not parse.
#[must_use]
pub fn format_date(record: &EventRecord) -> String {
    record
        .parsed_date()
        .map_or_else(|| record.date.clone(), |d| d.format("%-d %B %Y").to_string())
}

/// `Venue, City`
#[must_use]
pub fn venue_line(record: &EventRecord) -> String {
    format!("{}, {}", record.venue, record.city)
}

/// `Venue, City, Country`, dropping an empty country
#[must_use]
pub fn location_line(record: &EventRecord) -> String {
    if record.country.is_empty() {
        venue_line(record)
    } else {
        format!("{}, {}, {}", record.venue, record.city, record.country)
    }
}
