//! Static site generation
//!
//! Renders a [`Catalog`] into plain HTML files:
//!
//! ```text
//! {out}/index.html            all records
//! {out}/years/{year}.html     one page per year
//! {out}/gigs/{name}.html      one detail page per record, see [`html::page_name`]
//! {out}/404.html              not-found page
//! {out}/css/style.css
//! ```
//!
//! Photo and video assets are referenced, never copied.

pub mod format;
pub mod html;

use crate::catalog::{AssetLayout, Catalog, EventRecord};
use crate::filters::filter_records;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while writing the site
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One rendered file, relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub path: PathBuf,
    pub contents: String,
}

impl Page {
    fn new(path: impl Into<PathBuf>, contents: String) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }
}

/// Summary of a finished build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    pub pages: usize,
    pub records: usize,
    pub years: usize,
}

/// Renders a catalog to static pages
pub struct SiteBuilder<'a> {
    catalog: &'a Catalog,
    layout: &'a AssetLayout,
    site_title: &'a str,
}

impl<'a> SiteBuilder<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog, layout: &'a AssetLayout, site_title: &'a str) -> Self {
        Self {
            catalog,
            layout,
            site_title,
        }
    }

    /// Render every page in memory
    #[must_use]
    pub fn render(&self) -> Vec<Page> {
        let years = self.catalog.years();
        let records = self.catalog.records();
        let mut pages = Vec::with_capacity(records.len() + years.len() + 3);

        let all: Vec<_> = records.iter().collect();
        pages.push(Page::new("index.html", self.listing(&all, &years, None, "")));

        for year in &years {
            let in_year = filter_records(records, "", year);
            pages.push(Page::new(
                Path::new("years").join(format!("{year}.html")),
                self.listing(&in_year, &years, Some(year.as_str()), "../"),
            ));
        }

        for record in records {
            let body = html::detail(record, self.layout, "../");
            pages.push(Page::new(
                Path::new("gigs").join(format!("{}.html", html::page_name(&record.id))),
                html::page(self.site_title, record.display_title(), "../", &body),
            ));
        }

        pages.push(Page::new(
            "404.html",
            html::page(self.site_title, "Gig not found", "", &html::not_found("")),
        ));
        pages.push(Page::new(Path::new("css").join("style.css"), html::CSS.to_string()));

        pages
    }

    /// Render and write every page below `out_dir`
    ///
    /// # Errors
    ///
    /// Returns `SiteError::WriteError` if a directory or file cannot be written.
    pub fn write(&self, out_dir: impl AsRef<Path>) -> Result<BuildReport, SiteError> {
        let out_dir = out_dir.as_ref();
        let pages = self.render();

        for page in &pages {
            let path = out_dir.join(&page.path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|source| SiteError::WriteError {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(&path, &page.contents)
                .map_err(|source| SiteError::WriteError { path: path.clone(), source })?;
            tracing::trace!(path = %path.display(), "wrote page");
        }

        let report = BuildReport {
            out_dir: out_dir.to_path_buf(),
            pages: pages.len(),
            records: self.catalog.len(),
            years: self.catalog.years().len(),
        };
        tracing::info!(out = %out_dir.display(), pages = report.pages, "site built");
        Ok(report)
    }

    fn listing(
        &self,
        records: &[&EventRecord],
        years: &[String],
        year: Option<&str>,
        root: &str,
    ) -> String {
        let content = format!(
            "{}\n{}",
            html::year_nav(years, year, root),
            html::grid(records, self.layout, root, self.catalog.is_empty())
        );
        html::page(self.site_title, year.unwrap_or_default(), root, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_records;
    use tempfile::TempDir;

    fn catalog() -> Catalog {
        Catalog::new(sample_records()).unwrap()
    }

    fn find<'p>(pages: &'p [Page], path: &str) -> &'p Page {
        pages
            .iter()
            .find(|p| p.path == Path::new(path))
            .unwrap_or_else(|| panic!("missing page {path}"))
    }

    #[test]
    fn test_render_page_set() {
        let catalog = catalog();
        let layout = AssetLayout::default();
        let pages = SiteBuilder::new(&catalog, &layout, "Drying Cactus").render();

        // index + 3 years + 4 records + 404 + css
        assert_eq!(pages.len(), 10);
        find(&pages, "index.html");
        find(&pages, "years/2024.html");
        find(&pages, "gigs/berlin-2022.html");
        find(&pages, "404.html");
        find(&pages, "css/style.css");
    }

    #[test]
    fn test_year_page_only_lists_that_year() {
        let catalog = catalog();
        let layout = AssetLayout::default();
        let pages = SiteBuilder::new(&catalog, &layout, "Drying Cactus").render();

        let page = &find(&pages, "years/2024.html").contents;
        assert!(page.contains("../gigs/oslo-2024.html"));
        assert!(page.contains("../gigs/lyon-2024.html"));
        assert!(!page.contains("paris-2023"));
        assert!(page.find("oslo-2024").unwrap() < page.find("lyon-2024").unwrap());
        assert!(page.contains("<title>2024 - Drying Cactus</title>"));
    }

    #[test]
    fn test_empty_catalog_index() {
        let catalog = Catalog::default();
        let layout = AssetLayout::default();
        let pages = SiteBuilder::new(&catalog, &layout, "Drying Cactus").render();

        assert_eq!(pages.len(), 3);
        assert!(find(&pages, "index.html").contents.contains(html::EMPTY_CATALOG));
    }

    #[test]
    fn test_write_creates_files() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog();
        let layout = AssetLayout::default();

        let report = SiteBuilder::new(&catalog, &layout, "Drying Cactus")
            .write(dir.path().join("out"))
            .unwrap();

        assert_eq!(report.pages, 10);
        assert_eq!(report.records, 4);
        assert_eq!(report.years, 3);

        let detail = fs::read_to_string(dir.path().join("out/gigs/paris-2023.html")).unwrap();
        assert!(detail.contains("<title>Hall A - Drying Cactus</title>"));
        assert!(detail.contains("../assets/gigs/paris-2023/2000/p2.webp"));
    }

    #[test]
    fn test_links_resolve_to_written_pages() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        let records = vec![
            EventRecord::new("live at o'hara", "2023-03-03", "O'Hara's", "Dublin", "IE"),
            EventRecord::new("a/b?c#d", "2022-02-02", "Odd", "Oslo", "NO"),
        ];
        let catalog = Catalog::new(records).unwrap();
        let layout = AssetLayout::default();

        SiteBuilder::new(&catalog, &layout, "t").write(&out).unwrap();

        for record in catalog.records() {
            let href = html::detail_href("", &record.id);
            let index = fs::read_to_string(out.join("index.html")).unwrap();
            assert!(index.contains(&html::escape_html(&href)));

            let target = urlencoding::decode(&href).unwrap();
            assert!(
                out.join(&*target).is_file(),
                "link target {target} not on disk"
            );
        }
    }

    #[test]
    fn test_write_error_names_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let catalog = catalog();
        let layout = AssetLayout::default();
        let err = SiteBuilder::new(&catalog, &layout, "t")
            .write(&blocker)
            .unwrap_err();
        assert!(err.to_string().contains("file"));
    }
}
