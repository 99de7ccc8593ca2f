//! HTML fragments for the static site
//!
//! Every function returns a complete fragment as a `String`. `root` is the
//! relative prefix from the page being rendered back to the site root (`""`
//! for top-level pages, `"../"` one directory down), so the output works from
//! any static host or straight off the filesystem.

use super::format::format_date;
use crate::catalog::{AssetLayout, EventRecord, video};

/// Message shown when a catalog has no records at all
pub const EMPTY_CATALOG: &str = "No gigs loaded.";

/// Message shown when a filter matches nothing
pub const NO_MATCHES: &str = "No gigs found matching your search.";

/// Escape text for use in element content and attribute values
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// File stem of a record's detail page below `gigs/`
///
/// Percent-encoded so any id maps to one distinct, slash-free file name.
#[must_use]
pub fn page_name(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Site-relative link to a record's detail page
///
/// The page name is encoded once more, so the path a browser decodes is the
/// file name written by [`page_name`].
#[must_use]
pub fn detail_href(root: &str, id: &str) -> String {
    format!("{root}gigs/{}.html", urlencoding::encode(&page_name(id)))
}

/// Site-relative path of a year page
#[must_use]
pub fn year_href(root: &str, year: &str) -> String {
    format!("{root}years/{}.html", urlencoding::encode(year))
}

/// Prefix a relative asset URL with `root`; absolute URLs pass through
fn asset_src(root: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") || url.starts_with('/') {
        url.to_string()
    } else {
        format!("{root}{url}")
    }
}

/// Wrap page content in the site shell
#[must_use]
pub fn page(site_title: &str, title: &str, root: &str, content: &str) -> String {
    let full_title = if title.is_empty() {
        escape_html(site_title)
    } else {
        format!("{} - {}", escape_html(title), escape_html(site_title))
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{full_title}</title>
    <link rel="stylesheet" href="{root}css/style.css">
</head>
<body>
    <header class="site-header">
        <a href="{root}index.html" class="site-header__logo">{site}</a>
    </header>
    <main>
{content}
    </main>
</body>
</html>
"#,
        site = escape_html(site_title),
    )
}

/// One grid card
#[must_use]
pub fn card(record: &EventRecord, layout: &AssetLayout, root: &str) -> String {
    let title = escape_html(record.display_title());
    let modifier = if record.upcoming { " gig-card--upcoming" } else { "" };
    let badge = if record.upcoming {
        r#"<span class="gig-card__badge">Upcoming</span>"#
    } else {
        ""
    };

    let image = layout.cover_url(record).map_or_else(
        || r#"<div class="gig-card__image gig-card__image--placeholder"></div>"#.to_string(),
        |src| {
            format!(
                r#"<img class="gig-card__image" src="{}" alt="{title}" loading="lazy" width="400" height="300">"#,
                escape_html(&asset_src(root, &src))
            )
        },
    );

    format!(
        r#"      <article class="gig-card{modifier}">
        <a href="{href}" class="gig-card__link">
          {image}
          <div class="gig-card__body">
            {badge}
            <h2 class="gig-card__title">{title}</h2>
            <p class="gig-card__venue">{venue}, {city}</p>
            <time class="gig-card__date" datetime="{datetime}">{date}</time>
          </div>
        </a>
      </article>
"#,
        href = escape_html(&detail_href(root, &record.id)),
        venue = escape_html(&record.venue),
        city = escape_html(&record.city),
        datetime = escape_html(&record.date),
        date = escape_html(&format_date(record)),
    )
}

/// The card grid, or the empty-result notice
///
/// `catalog_empty` selects which notice is shown when `records` is empty.
#[must_use]
pub fn grid(records: &[&EventRecord], layout: &AssetLayout, root: &str, catalog_empty: bool) -> String {
    if records.is_empty() {
        let message = if catalog_empty { EMPTY_CATALOG } else { NO_MATCHES };
        return format!(r#"    <p class="gig-grid__empty">{message}</p>"#);
    }

    let cards: String = records.iter().map(|r| card(r, layout, root)).collect();
    format!("    <div class=\"gig-grid\">\n{cards}    </div>")
}

/// Year navigation, newest first, with an "All years" entry
///
/// `selected` marks the current page's year; `None` marks "All years".
#[must_use]
pub fn year_nav(years: &[String], selected: Option<&str>, root: &str) -> String {
    let mut items = Vec::with_capacity(years.len() + 1);

    let all_current = if selected.is_none() { r#" aria-current="page""# } else { "" };
    items.push(format!(
        r#"<li><a href="{root}index.html"{all_current}>All years</a></li>"#
    ));

    for year in years {
        let current = if selected == Some(year.as_str()) {
            r#" aria-current="page""#
        } else {
            ""
        };
        items.push(format!(
            r#"<li><a href="{}"{current}>{}</a></li>"#,
            escape_html(&year_href(root, year)),
            escape_html(year)
        ));
    }

    format!(
        "    <nav class=\"year-nav\" aria-label=\"Filter by year\">\n      <ul>{}</ul>\n    </nav>",
        items.join("")
    )
}

/// Full detail view of one record
#[must_use]
pub fn detail(record: &EventRecord, layout: &AssetLayout, root: &str) -> String {
    let mut html = String::new();

    let badge = if record.upcoming {
        r#"<span class="gig-detail__badge">Upcoming</span>"#
    } else {
        ""
    };
    let venue = match record.venue_url.as_deref().filter(|u| !u.is_empty()) {
        Some(url) => format!(
            r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
            escape_html(url),
            escape_html(&record.venue)
        ),
        None => escape_html(&record.venue),
    };
    let support = record.support_for.as_ref().map_or_else(String::new, |act| {
        format!(
            r#"<span>Support for <a href="{}" target="_blank" rel="noopener">{}</a></span>"#,
            escape_html(&act.url),
            escape_html(&act.name)
        )
    });

    html.push_str(&format!(
        r#"    <header class="gig-detail__header">
      {badge}
      <h1 class="gig-detail__title">{title}</h1>
      <div class="gig-detail__meta">
        <span><time datetime="{datetime}">{date}</time></span>
        <span>{venue}, {city}, {country}</span>
        {support}
      </div>
    </header>
"#,
        title = escape_html(record.display_title()),
        datetime = escape_html(&record.date),
        date = escape_html(&format_date(record)),
        city = escape_html(&record.city),
        country = escape_html(&record.country),
    ));

    if let Some(description) = record.description.as_deref().filter(|d| !d.is_empty()) {
        html.push_str(&format!(
            "    <p class=\"gig-detail__description\">{}</p>\n",
            escape_html(description)
        ));
    }

    if !record.credits.is_empty() {
        let items: String = record
            .credits
            .iter()
            .map(|(role, name)| {
                format!(
                    r#"<li><span class="credits-list__role">{}:</span> {}</li>"#,
                    escape_html(role),
                    escape_html(name)
                )
            })
            .collect();
        html.push_str(&format!(
            r#"    <section class="gig-detail__credits">
      <h2>Credits</h2>
      <ul class="credits-list">{items}</ul>
    </section>
"#
        ));
    }

    let embeds: String = video::video_ids(&record.youtube_urls)
        .map(|id| {
            format!(
                r#"<div class="video-wrapper"><iframe src="{}" title="YouTube video" allow="accelerometer; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen loading="lazy"></iframe></div>"#,
                video::embed_url(id)
            )
        })
        .collect();
    if !embeds.is_empty() {
        html.push_str(&format!(
            r#"    <section class="gig-detail__videos">
      <h2>Videos</h2>
      <div class="video-grid">{embeds}</div>
    </section>
"#
        ));
    }

    let photos = layout.photo_refs(record);
    if !photos.is_empty() {
        let tiles: String = photos
            .iter()
            .enumerate()
            .map(|(i, photo)| {
                let n = i + 1;
                format!(
                    r#"<a class="gallery-grid__item" href="{large}" data-index="{i}" aria-label="View photo {n}"><img src="{thumb}" alt="Concert photo {n}" loading="lazy" width="400" height="300"></a>"#,
                    large = escape_html(&asset_src(root, &photo.large)),
                    thumb = escape_html(&asset_src(root, &photo.thumb)),
                )
            })
            .collect();
        html.push_str(&format!(
            r#"    <section class="gig-detail__gallery">
      <h2>Photos</h2>
      <div class="gallery-grid">{tiles}</div>
    </section>
"#
        ));
    }

    html
}

/// Body of the not-found page
#[must_use]
pub fn not_found(root: &str) -> String {
    format!(
        r#"    <div class="gig-error">
      <h1>Gig not found</h1>
      <p>The gig you're looking for doesn't exist.</p>
      <p><a href="{root}index.html">Back to all gigs</a></p>
    </div>"#
    )
}

/// Stylesheet written to `css/style.css`
pub const CSS: &str = r#":root {
    --bg: #111;
    --text: #eee;
    --muted: #999;
    --accent: #e0a040;
}
body { margin: 0; background: var(--bg); color: var(--text); font-family: system-ui, sans-serif; }
a { color: inherit; }
main { max-width: 1100px; margin: 0 auto; padding: 1rem; }
.site-header { padding: 1rem; border-bottom: 1px solid #333; }
.site-header__logo { font-weight: bold; text-decoration: none; }
.year-nav ul { display: flex; flex-wrap: wrap; gap: .5rem; list-style: none; padding: 0; }
.year-nav a[aria-current] { color: var(--accent); }
.gig-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1rem; }
.gig-grid__empty { color: var(--muted); }
.gig-card__link { display: block; text-decoration: none; }
.gig-card__image { width: 100%; height: auto; aspect-ratio: 4 / 3; object-fit: cover; background: #222; }
.gig-card__badge, .gig-detail__badge { color: var(--accent); font-size: .8rem; text-transform: uppercase; }
.gig-card__venue, .gig-card__date, .gig-detail__meta { color: var(--muted); }
.gig-detail__meta span { display: block; }
.credits-list__role { color: var(--muted); }
.video-grid, .gallery-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: .5rem; }
.video-wrapper iframe { width: 100%; aspect-ratio: 16 / 9; border: 0; }
.gallery-grid__item img { width: 100%; height: auto; display: block; }
"#;
