//! YouTube link handling
//!
//! Records may list video links in any of the common YouTube forms. Links that
//! do not yield an 11-character video id produce no embed and are skipped.

use regex::Regex;
use std::sync::LazyLock;

static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|youtube\.com/(?:watch\?v=|embed/|v/))([a-zA-Z0-9_-]{11})")
        .expect("static YouTube pattern is valid")
});

/// Extract the video id from a YouTube link
///
/// Recognises `youtu.be/ID`, `youtube.com/watch?v=ID`, `youtube.com/embed/ID`
/// and `youtube.com/v/ID`.
#[must_use]
pub fn extract_youtube_id(url: &str) -> Option<&str> {
    YOUTUBE_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Privacy-enhanced embed URL for a video id
#[must_use]
pub fn embed_url(id: &str) -> String {
    format!("https://www.youtube-nocookie.com/embed/{id}")
}

/// Preview image URL for a video id
#[must_use]
pub fn thumbnail_url(id: &str) -> String {
    format!("https://img.youtube.com/vi/{id}/hqdefault.jpg")
}

/// Video ids for every recognisable link, in input order
pub fn video_ids<'a>(urls: &'a [String]) -> impl Iterator<Item = &'a str> + 'a {
    urls.iter().filter_map(|url| extract_youtube_id(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_known_forms() {
        let id = "dQw4w9WgXcQ";
        for url in [
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://youtube.com/embed/dQw4w9WgXcQ",
            "http://www.youtube.com/v/dQw4w9WgXcQ",
        ] {
            assert_eq!(extract_youtube_id(url), Some(id), "{url}");
        }
    }

    #[test]
    fn test_extract_rejects_malformed() {
        assert_eq!(extract_youtube_id("https://vimeo.com/12345678901"), None);
        assert_eq!(extract_youtube_id("https://youtu.be/short"), None);
        assert_eq!(extract_youtube_id(""), None);
    }

    #[test]
    fn test_video_ids_skip_invalid_links() {
        let urls = vec![
            "not a link".to_string(),
            "https://youtu.be/aaaaaaaaaaa".to_string(),
            "https://youtube.com/embed/bbbbbbbbbbb".to_string(),
        ];
        let ids: Vec<_> = video_ids(&urls).collect();
        assert_eq!(ids, vec!["aaaaaaaaaaa", "bbbbbbbbbbb"]);
    }

    #[test]
    fn test_urls() {
        assert_eq!(
            embed_url("abc"),
            "https://www.youtube-nocookie.com/embed/abc"
        );
        assert_eq!(
            thumbnail_url("abc"),
            "https://img.youtube.com/vi/abc/hqdefault.jpg"
        );
    }
}
