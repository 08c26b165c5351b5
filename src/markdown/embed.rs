//! `{{youtube:...}}` directive support.

use regex::Regex;
use std::sync::LazyLock;

static RE_YOUTUBE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\s]+)").unwrap()
});

static RE_YOUTUBE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z0-9_-]{11})$").unwrap());

const ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Pull a video id out of a watch/short/embed URL or a bare 11-char id.
///
/// Anything else is returned unchanged.
pub fn extract_youtube_id(value: &str) -> &str {
    [&*RE_YOUTUBE_URL, &*RE_YOUTUBE_ID]
        .into_iter()
        .find_map(|re| re.captures(value))
        .and_then(|caps| caps.get(1))
        .map_or(value, |m| m.as_str())
}

/// Responsive iframe markup for a video id.
pub fn video_embed(id: &str) -> String {
    format!(
        r#"<div class="video-container"><iframe src="https://www.youtube.com/embed/{id}" title="YouTube video" allow="{ALLOW}" allowfullscreen></iframe></div>"#
    )
}
