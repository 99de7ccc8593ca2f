//! Build command - render the static site

use crate::{
    GigError, catalog::Catalog, config::GigshelfConfig, site::SiteBuilder, ui::OutputWriter,
};
use std::path::Path;

type Result<T> = std::result::Result<T, GigError>;

/// Execute the build command
///
/// # Errors
/// Returns `SiteError` if any page cannot be written.
pub fn execute(
    catalog: &Catalog,
    config: &GigshelfConfig,
    out_dir: &Path,
    out: &dyn OutputWriter,
) -> Result<()> {
    if catalog.is_empty() {
        out.warning("Catalog is empty; building an empty site");
    }

    let report = SiteBuilder::new(catalog, &config.assets, &config.site_title).write(out_dir)?;
    out.success(&format!(
        "Built {} page(s) for {} gig(s) across {} year(s) in {}",
        report.pages,
        report.records,
        report.years,
        report.out_dir.display()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_records;
    use crate::ui::MessageLevel;
    use crate::ui::mock::MemoryWriter;

    #[test]
    fn test_build_writes_site() {
        let dir = tempfile::tempdir().unwrap();
        let out = MemoryWriter::default();
        let catalog = Catalog::new(sample_records()).unwrap();

        execute(&catalog, &GigshelfConfig::default(), dir.path(), &out).unwrap();

        assert!(dir.path().join("index.html").exists());
        assert!(dir.path().join("gigs").join("oslo-2024.html").exists());
        assert!(out.contains(MessageLevel::Success, "Built 10 page(s) for 4 gig(s)"));
    }

    #[test]
    fn test_build_empty_catalog_warns() {
        let dir = tempfile::tempdir().unwrap();
        let out = MemoryWriter::default();

        execute(&Catalog::default(), &GigshelfConfig::default(), dir.path(), &out).unwrap();

        assert!(out.contains(MessageLevel::Warning, "empty"));
        assert!(dir.path().join("404.html").exists());
    }

    #[test]
    fn test_build_into_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("site");
        std::fs::write(&blocker, "not a directory").unwrap();
        let out = MemoryWriter::default();
        let catalog = Catalog::new(sample_records()).unwrap();

        let err = execute(&catalog, &GigshelfConfig::default(), &blocker, &out).unwrap_err();
        assert!(matches!(err, GigError::SiteError(_)));
    }
}
