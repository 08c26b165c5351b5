//! `[build]` section configuration.
//!
//! ```toml
//! [build]
//! content = "src/content/articles"   # markdown articles
//! output = "dist"                    # generated site
//! templates = "src/pages"            # article template, index.html, write.html
//! css = "src/css"
//! js = "src/js"
//! minify = false                     # minify sitemap and feed XML
//! words_per_minute = 200             # reading time estimate
//! default_author_avatar = "/images/authors/editorial-team.jpg"
//! related_count = 3                  # related articles per page
//! feed_count = 10                    # items in rss.xml
//!
//! [build.feed]
//! enable = true
//! path = "rss.xml"
//!
//! [build.sitemap]
//! enable = true
//! path = "sitemap.xml"
//! ```

mod feed;
mod sitemap;

pub use feed::FeedConfig;
pub use sitemap::SitemapConfig;

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    pub content: PathBuf,
    pub output: PathBuf,
    pub templates: PathBuf,
    pub css: PathBuf,
    pub js: PathBuf,

    pub minify: bool,

    /// Clean output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,

    pub words_per_minute: usize,
    pub default_author_avatar: String,
    pub related_count: usize,
    pub feed_count: usize,

    pub feed: FeedConfig,
    pub sitemap: SitemapConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "src/content/articles".into(),
            output: "dist".into(),
            templates: "src/pages".into(),
            css: "src/css".into(),
            js: "src/js".into(),
            minify: false,
            clean: false,
            words_per_minute: 200,
            default_author_avatar: "/images/authors/editorial-team.jpg".into(),
            related_count: 3,
            feed_count: 10,
            feed: FeedConfig::default(),
            sitemap: SitemapConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    pub const WORDS_PER_MINUTE: FieldPath = FieldPath::new("build.words_per_minute");
    pub const FEED_COUNT: FieldPath = FieldPath::new("build.feed_count");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.words_per_minute == 0 {
            diag.error_with_hint(
                Self::WORDS_PER_MINUTE,
                "must be greater than 0",
                "the usual reading speed is 200",
            );
        }
        if self.feed.enable && self.feed_count == 0 {
            diag.warn(Self::FEED_COUNT, "feed is enabled but will contain no items");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.content, PathBuf::from("src/content/articles"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.build.templates, PathBuf::from("src/pages"));
        assert_eq!(config.build.words_per_minute, 200);
        assert_eq!(config.build.related_count, 3);
        assert_eq!(config.build.feed_count, 10);
        assert!(!config.build.minify);
        assert!(config.build.sitemap.enable);
    }

    #[test]
    fn test_custom() {
        let config = test_parse_config(
            "[build]\noutput = \"public\"\nminify = true\nwords_per_minute = 250\n[build.sitemap]\nenable = false",
        );
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.minify);
        assert_eq!(config.build.words_per_minute, 250);
        assert!(!config.build.sitemap.enable);
    }

    #[test]
    fn test_zero_words_per_minute_rejected() {
        let config = test_parse_config("[build]\nwords_per_minute = 0");
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
