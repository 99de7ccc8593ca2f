//! Years command - distinct years with record counts

use crate::{
    GigError,
    catalog::Catalog,
    filters::filter_records,
    output,
    site::html::EMPTY_CATALOG,
    ui::OutputWriter,
};

type Result<T> = std::result::Result<T, GigError>;

/// Execute the years command
///
/// # Errors
/// Currently infallible; returns `Result` for a uniform command signature.
pub fn execute(catalog: &Catalog, quiet: bool, out: &dyn OutputWriter) -> Result<()> {
    let years = catalog.years();
    if years.is_empty() {
        out.info(EMPTY_CATALOG);
        return Ok(());
    }

    if !quiet {
        out.info("Years in catalog:");
    }
    for year in &years {
        let count = filter_records(catalog.records(), "", year).len();
        out.write(&output::year_with_count(year, count, quiet));
    }
    Ok(())
}
