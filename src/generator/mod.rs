//! Site output generators.
//!
//! - **article**: article pages from the article template
//! - **category**: one listing page per configured category
//! - **assets**: homepage, stylesheets, scripts, editor page
//! - **sitemap** / **feed**: `sitemap.xml` and `rss.xml`
//!
//! All generators take the article list produced by
//! [`crate::page::load_articles`].

pub mod article;
pub mod assets;
pub mod card;
pub mod category;
pub mod feed;
pub mod sitemap;
pub mod style;
pub mod template;

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Minify XML content if enabled.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if enabled {
        let xml_str = std::str::from_utf8(content).unwrap_or("");
        let minified = xml_str
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified.into_bytes())
    } else {
        Cow::Borrowed(content)
    }
}

/// Write `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
