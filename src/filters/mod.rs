//! Filter engine
//!
//! Derives the visible subset of the catalog from a text query and a year.
//!
//! # Rules
//!
//! - **Year**: a non-empty year keeps records whose `date` starts with it.
//! - **Text**: a non-blank query (trimmed, lower-cased) must appear in the
//!   display title, venue, city or country of a record.
//! - Both rules must pass. Output order is input order; the catalog is sorted
//!   newest first once, at load time.
//!
//! # Examples
//!
//! ```
//! use gigshelf::catalog::EventRecord;
//! use gigshelf::filters::{available_years, filter_records};
//!
//! let records = vec![
//!     EventRecord::new("b", "2024-01-10", "Club B", "Lyon", "FR"),
//!     EventRecord::new("a", "2023-05-01", "Hall A", "Paris", "FR"),
//! ];
//!
//! let in_2023 = filter_records(&records, "", "2023");
//! assert_eq!(in_2023[0].id, "a");
//! assert_eq!(available_years(&records), vec!["2024", "2023"]);
//! ```

pub mod operations;
pub mod types;

pub use operations::{
    RecordFilterExt, apply, available_years, filter_records, matching_indices,
};
pub use types::FilterCriteria;
