//! Record filtering and year enumeration
//!
//! Every function here is pure: records are only borrowed, results are new
//! vectors in input order, and no input is ever an error.
//!
//! # Iterator Adapter
//!
//! [`RecordFilterExt`] adds fluent filtering to any iterator of record
//! references:
//!
//! ```
//! use gigshelf::catalog::EventRecord;
//! use gigshelf::filters::{FilterCriteria, RecordFilterExt};
//!
//! let records = vec![EventRecord::new("a", "2023-05-01", "Hall A", "Paris", "FR")];
//! let criteria = FilterCriteria::new().with_query("paris");
//! let visible = records.iter().matching(&criteria);
//! assert_eq!(visible.len(), 1);
//! ```

use super::types::FilterCriteria;
use crate::catalog::EventRecord;
use std::collections::BTreeSet;

/// Whether a record falls in the given year (`None` passes everything)
#[must_use]
pub fn matches_year(record: &EventRecord, year: Option<&str>) -> bool {
    year.is_none_or(|y| record.date.starts_with(y))
}

/// Whether any searchable field contains an already lower-cased needle
///
/// Searched fields: display title, venue, city, country.
#[must_use]
pub fn matches_needle(record: &EventRecord, needle: &str) -> bool {
    [
        record.display_title(),
        record.venue.as_str(),
        record.city.as_str(),
        record.country.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Filter records by a query and year
///
/// `query` is trimmed and matched case-insensitively; an empty `year` means all
/// years. The result is a subsequence of `records` in the same order.
#[must_use]
pub fn filter_records<'a>(records: &'a [EventRecord], query: &str, year: &str) -> Vec<&'a EventRecord> {
    let criteria = FilterCriteria::new().with_query(query).with_year(year);
    apply(records, &criteria)
}

/// Filter records by prepared criteria
#[must_use]
pub fn apply<'a>(
    records: impl IntoIterator<Item = &'a EventRecord>,
    criteria: &FilterCriteria,
) -> Vec<&'a EventRecord> {
    let year = criteria.year_prefix();
    let needle = criteria.needle();

    records
        .into_iter()
        .filter(|record| matches_year(record, year))
        .filter(|record| {
            needle
                .as_deref()
                .is_none_or(|needle| matches_needle(record, needle))
        })
        .collect()
}

/// Positions (into `records`) of the records matching the criteria
///
/// Used by hosts that keep a cursor into the full collection.
#[must_use]
pub fn matching_indices(records: &[EventRecord], criteria: &FilterCriteria) -> Vec<usize> {
    let year = criteria.year_prefix();
    let needle = criteria.needle();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_year(record, year))
        .filter(|(_, record)| {
            needle
                .as_deref()
                .is_none_or(|needle| matches_needle(record, needle))
        })
        .map(|(i, _)| i)
        .collect()
}

/// Distinct years present in the records, newest first
#[must_use]
pub fn available_years<'a>(records: impl IntoIterator<Item = &'a EventRecord>) -> Vec<String> {
    records
        .into_iter()
        .map(EventRecord::year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .map(str::to_string)
        .collect()
}

/// Extension trait for filtering iterators of record references
pub trait RecordFilterExt<'a>: IntoIterator<Item = &'a EventRecord> + Sized {
    /// Keep the records matching the criteria, preserving order
    fn matching(self, criteria: &FilterCriteria) -> Vec<&'a EventRecord> {
        apply(self, criteria)
    }

    /// Keep the records whose date falls in `year`
    fn in_year(self, year: &str) -> Vec<&'a EventRecord> {
        apply(self, &FilterCriteria::new().with_year(year))
    }
}

impl<'a, I> RecordFilterExt<'a> for I where I: IntoIterator<Item = &'a EventRecord> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::testing::sample_records;

    fn scenario() -> Vec<EventRecord> {
        let records = vec![
            EventRecord::new("a", "2023-05-01", "Hall A", "Paris", "FR"),
            EventRecord::new("b", "2024-01-10", "Club B", "Lyon", "FR"),
        ];
        Catalog::new(records).unwrap().records().to_vec()
    }

    fn ids(records: &[&EventRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_scenario_sorted_then_filtered() {
        let sorted = scenario();
        assert_eq!(sorted[0].id, "b");
        assert_eq!(sorted[1].id, "a");

        assert_eq!(ids(&filter_records(&sorted, "", "2023")), vec!["a"]);
        assert_eq!(ids(&filter_records(&sorted, "club", "")), vec!["b"]);
        assert!(filter_records(&sorted, "xyz", "").is_empty());
        assert_eq!(ids(&filter_records(&sorted, "", "")), vec!["b", "a"]);
    }

    #[test]
    fn test_filter_is_pure_and_repeatable() {
        let records = sample_records();
        let before = records.clone();

        let first = ids(&filter_records(&records, "fr", "2023"));
        let second = ids(&filter_records(&records, "fr", "2023"));

        assert_eq!(first, second);
        assert_eq!(records, before);
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let records = sample_records();
        let result = filter_records(&records, "", "");
        let positions: Vec<_> = result
            .iter()
            .map(|r| records.iter().position(|x| x.id == r.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let partial = filter_records(&records, "o", "");
        let positions: Vec<_> = partial
            .iter()
            .map(|r| records.iter().position(|x| x.id == r.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_year_prefix_is_exact_and_complete() {
        let records = sample_records();
        for year in available_years(&records) {
            let result = filter_records(&records, "", &year);
            assert!(result.iter().all(|r| r.date.starts_with(&year)));

            let expected = records.iter().filter(|r| r.date.starts_with(&year)).count();
            assert_eq!(result.len(), expected);
        }
    }

    #[test]
    fn test_case_insensitive_query() {
        let records = sample_records();
        assert_eq!(
            ids(&filter_records(&records, "HALL A", "")),
            ids(&filter_records(&records, "hall a", ""))
        );
        assert!(!filter_records(&records, "HaLl", "").is_empty());
    }

    #[test]
    fn test_query_is_trimmed() {
        let records = sample_records();
        assert_eq!(
            ids(&filter_records(&records, "  paris  ", "")),
            ids(&filter_records(&records, "paris", ""))
        );
        assert_eq!(filter_records(&records, "   ", "").len(), records.len());
    }

    #[test]
    fn test_query_matches_title_country_and_city() {
        let records = sample_records();
        assert_eq!(ids(&filter_records(&records, "autumn", "")), vec!["berlin-2022"]);
        assert_eq!(ids(&filter_records(&records, "de", "")), vec!["berlin-2022"]);
        assert_eq!(ids(&filter_records(&records, "oslo", "")), vec!["oslo-2024"]);
    }

    #[test]
    fn test_query_and_year_are_combined() {
        let records = sample_records();
        assert!(filter_records(&records, "paris", "2024").is_empty());
        assert_eq!(ids(&filter_records(&records, "paris", "2023")), vec!["paris-2023"]);
    }

    #[test]
    fn test_empty_collection() {
        assert!(filter_records(&[], "anything", "2023").is_empty());
        assert!(available_years(&[]).is_empty());
    }

    #[test]
    fn test_available_years_distinct_descending() {
        let mut records = sample_records();
        records.push(EventRecord::new("x", "2023-12-31", "Late", "Rome", "IT"));
        assert_eq!(available_years(&records), vec!["2024", "2023", "2022"]);
    }

    #[test]
    fn test_matching_indices_follow_input_positions() {
        let records = sample_records();
        let criteria = FilterCriteria::new().with_year("2024");
        let indices = matching_indices(&records, &criteria);
        assert!(indices.iter().all(|&i| records[i].year() == "2024"));
        assert_eq!(indices.len(), apply(&records, &criteria).len());
    }

    #[test]
    fn test_extension_trait() {
        let records = sample_records();
        let in_2022 = records.iter().in_year("2022");
        assert_eq!(ids(&in_2022), vec!["berlin-2022"]);

        let criteria = FilterCriteria::new().with_query("lyon");
        assert_eq!(ids(&records.iter().matching(&criteria)), vec!["lyon-2024"]);
    }
}
