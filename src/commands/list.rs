//! List command - print records matching a query and year

use crate::{
    GigError,
    catalog::Catalog,
    config::OutputFormat,
    filters::filter_records,
    output,
    site::html::{EMPTY_CATALOG, NO_MATCHES},
    ui::OutputWriter,
};

type Result<T> = std::result::Result<T, GigError>;

/// Execute the list command
///
/// Text output prints an explanatory line when nothing matches; JSON and CSV
/// always print a document, possibly empty.
///
/// # Errors
/// Returns an error if JSON or CSV serialization fails.
pub fn execute(
    catalog: &Catalog,
    query: Option<&str>,
    year: Option<&str>,
    format: OutputFormat,
    quiet: bool,
    out: &dyn OutputWriter,
) -> Result<()> {
    let matches = filter_records(
        catalog.records(),
        query.unwrap_or_default(),
        year.unwrap_or_default(),
    );
    tracing::debug!(?query, ?year, matches = matches.len(), "list");

    if format == OutputFormat::Text && matches.is_empty() {
        out.info(if catalog.is_empty() {
            EMPTY_CATALOG
        } else {
            NO_MATCHES
        });
        return Ok(());
    }

    let rendered = output::render_records(&matches, format, quiet)?;
    if format == OutputFormat::Text && !quiet {
        out.info(&format!("{} of {} gig(s):", matches.len(), catalog.len()));
    }
    out.write(rendered.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_records;
    use crate::ui::MessageLevel;
    use crate::ui::mock::MemoryWriter;

    fn catalog() -> Catalog {
        Catalog::new(sample_records()).unwrap()
    }

    #[test]
    fn test_list_quiet_prints_ids_newest_first() {
        let out = MemoryWriter::default();
        execute(&catalog(), None, None, OutputFormat::Text, true, &out).unwrap();
        assert_eq!(
            out.lines(),
            vec!["oslo-2024\nlyon-2024\nparis-2023\nberlin-2022"]
        );
    }

    #[test]
    fn test_list_query_and_year() {
        let out = MemoryWriter::default();
        execute(&catalog(), Some("FR"), Some("2023"), OutputFormat::Text, true, &out).unwrap();
        assert_eq!(out.lines(), vec!["paris-2023"]);
    }

    #[test]
    fn test_list_no_matches_message() {
        let out = MemoryWriter::default();
        execute(&catalog(), Some("nowhere"), None, OutputFormat::Text, false, &out).unwrap();
        assert!(out.lines().is_empty());
        assert!(out.contains(MessageLevel::Info, NO_MATCHES));
    }

    #[test]
    fn test_list_empty_catalog_message() {
        let out = MemoryWriter::default();
        let empty = Catalog::default();
        execute(&empty, None, None, OutputFormat::Text, false, &out).unwrap();
        assert!(out.contains(MessageLevel::Info, EMPTY_CATALOG));
    }

    #[test]
    fn test_list_json_empty_is_array() {
        let out = MemoryWriter::default();
        execute(&catalog(), Some("nowhere"), None, OutputFormat::Json, false, &out).unwrap();
        assert_eq!(out.lines(), vec!["[]"]);
    }
}
