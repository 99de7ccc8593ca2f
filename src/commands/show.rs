//! Show command - one record in full

use crate::{
    GigError,
    catalog::{AssetLayout, Catalog},
    ui::OutputWriter,
};

type Result<T> = std::result::Result<T, GigError>;

/// Execute the show command
///
/// In quiet mode the record is printed as JSON.
///
/// # Errors
/// Returns `CatalogError::NotFound` if no record has this id.
pub fn execute(
    catalog: &Catalog,
    layout: &AssetLayout,
    id: &str,
    quiet: bool,
    out: &dyn OutputWriter,
) -> Result<()> {
    let record = catalog.find(id)?;

    if quiet {
        let json = serde_json::to_string_pretty(record).map_err(crate::output::OutputError::from)?;
        out.write(&json);
    } else {
        for line in crate::output::record_details(record, layout) {
            out.write(&line);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use crate::testing::{sample_records, strip_ansi};
    use crate::ui::mock::MemoryWriter;

    fn catalog() -> Catalog {
        Catalog::new(sample_records()).unwrap()
    }

    #[test]
    fn test_show_prints_details() {
        let out = MemoryWriter::default();
        execute(&catalog(), &AssetLayout::default(), "berlin-2022", false, &out).unwrap();

        let lines: Vec<String> = out.lines().iter().map(|l| strip_ansi(l)).collect();
        assert_eq!(lines[0], "Autumn Session");
        assert!(lines.iter().any(|l| l.contains("Lido, Berlin, DE")));
    }

    #[test]
    fn test_show_quiet_is_json() {
        let out = MemoryWriter::default();
        execute(&catalog(), &AssetLayout::default(), "oslo-2024", true, &out).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out.lines()[0]).unwrap();
        assert_eq!(value["id"], "oslo-2024");
        assert_eq!(value["upcoming"], true);
    }

    #[test]
    fn test_show_unknown_id_is_not_found() {
        let out = MemoryWriter::default();
        let err = execute(&catalog(), &AssetLayout::default(), "nope", false, &out).unwrap_err();
        assert!(matches!(
            err,
            GigError::CatalogError(CatalogError::NotFound(id)) if id == "nope"
        ));
        assert!(out.messages().is_empty());
    }
}
