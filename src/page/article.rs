//! A single article and its derived display fields.

use crate::config::SiteConfig;
use crate::frontmatter::{self, FrontmatterRecord};
use crate::markdown;
use crate::utils::date::{DateTimeUtc, format_display};
use std::path::Path;

/// Author shown when the frontmatter names none.
pub const DEFAULT_AUTHOR: &str = "Editorial Team";

/// A parsed and rendered article.
///
/// Frontmatter fields are copied out of [`Article::record`] for convenience;
/// the full record is kept for fields templates may add later.
#[derive(Debug, Clone)]
pub struct Article {
    pub title: String,
    pub slug: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub publish_date: String,
    pub excerpt: String,
    pub thumbnail: String,
    pub background_color: String,
    pub page_accent: String,
    pub font_style: String,
    pub featured_score: Option<f64>,
    pub youtube_url: String,

    pub record: FrontmatterRecord,
    /// Markdown body without the header.
    pub body: String,
    pub html: String,

    /// Minutes, never below one.
    pub reading_time: usize,
    pub formatted_date: String,
    pub category_slug: String,
    pub author_avatar: String,
    pub file_name: String,
}

impl Article {
    /// Build an article from the raw text of `file_name`.
    ///
    /// Missing `slug` falls back to the file stem so every article has an
    /// output path.
    pub fn from_source(file_name: &str, source: &str, config: &SiteConfig) -> Self {
        let (record, body) = frontmatter::parse(source);
        let html = markdown::render(&body);

        let field = |key: &str| record.text(key).unwrap_or_default();
        let slug = record
            .text("slug")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| file_stem(file_name).to_owned());
        let author = record
            .text("author")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_owned());
        let category = field("category");
        let publish_date = field("publish_date");

        Self {
            title: field("title"),
            author,
            tags: record.list("tags").map(<[String]>::to_vec).unwrap_or_default(),
            excerpt: field("excerpt"),
            thumbnail: field("thumbnail"),
            background_color: field("background_color"),
            page_accent: field("page_accent"),
            font_style: field("font_style"),
            featured_score: record.number("featured_score"),
            youtube_url: field("youtube_url"),
            reading_time: reading_time(&body, config.build.words_per_minute),
            formatted_date: format_display(&publish_date),
            category_slug: category_slug(&category),
            author_avatar: config.build.default_author_avatar.clone(),
            file_name: file_name.to_owned(),
            slug,
            category,
            publish_date,
            record,
            body,
            html,
        }
    }

    /// Parsed `publish_date`, `None` when it is missing or malformed.
    pub fn date(&self) -> Option<DateTimeUtc> {
        DateTimeUtc::parse(&self.publish_date)
    }

    /// Site-relative URL of the generated page.
    pub fn url(&self) -> String {
        format!("/articles/{}.html", self.slug)
    }

    /// Case-insensitive category match, as category pages do it.
    pub fn in_category(&self, name: &str) -> bool {
        self.category.to_lowercase() == name.to_lowercase()
    }
}

/// `ceil(words / words_per_minute)`, at least 1.
pub fn reading_time(body: &str, words_per_minute: usize) -> usize {
    let words = body.split_whitespace().count();
    words.div_ceil(words_per_minute.max(1)).max(1)
}

/// Lowercase with whitespace runs collapsed into `-`.
pub fn category_slug(category: &str) -> String {
    category
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn file_stem(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    const SOURCE: &str = "---\ntitle: \"Hello World\"\nslug: \"hello-world\"\ncategory: \"Personal Finance\"\ntags: [\"money\", \"tips\"]\npublish_date: \"2024-06-15\"\nfeatured_score: 80\n---\n# Hi\n\nSome words here.";

    #[test]
    fn test_from_source() {
        let config = test_parse_config("");
        let article = Article::from_source("hello.md", SOURCE, &config);

        assert_eq!(article.title, "Hello World");
        assert_eq!(article.slug, "hello-world");
        assert_eq!(article.author, DEFAULT_AUTHOR);
        assert_eq!(article.tags, ["money", "tips"]);
        assert_eq!(article.featured_score, Some(80.0));
        assert_eq!(article.formatted_date, "Jun 15, 2024");
        assert_eq!(article.category_slug, "personal-finance");
        assert_eq!(article.reading_time, 1);
        assert_eq!(article.html, "<h1>Hi</h1>\n<p>Some words here.</p>");
        assert_eq!(article.body, "# Hi\n\nSome words here.");
        assert_eq!(article.author_avatar, config.build.default_author_avatar);
        assert_eq!(article.url(), "/articles/hello-world.html");
    }

    #[test]
    fn test_missing_header() {
        let config = test_parse_config("");
        let article = Article::from_source("plain-note.md", "just text", &config);
        assert_eq!(article.slug, "plain-note");
        assert_eq!(article.title, "");
        assert!(article.tags.is_empty());
        assert_eq!(article.formatted_date, "");
        assert!(article.date().is_none());
        assert_eq!(article.html, "<p>just text</p>");
    }

    #[test]
    fn test_unparseable_date_is_shown_raw() {
        let config = test_parse_config("");
        let article = Article::from_source("a.md", "---\npublish_date: someday\n---\n", &config);
        assert_eq!(article.formatted_date, "someday");
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time("", 200), 1);
        assert_eq!(reading_time(&"word ".repeat(200), 200), 1);
        assert_eq!(reading_time(&"word ".repeat(201), 200), 2);
        assert_eq!(reading_time(&"word ".repeat(1000), 250), 4);
    }

    #[test]
    fn test_category_slug() {
        assert_eq!(category_slug("Technology"), "technology");
        assert_eq!(category_slug("Arts  and\tCrafts"), "arts-and-crafts");
        assert_eq!(category_slug(""), "");
    }

    #[test]
    fn test_in_category() {
        let config = test_parse_config("");
        let article = Article::from_source("a.md", "---\ncategory: TECHNOLOGY\n---\n", &config);
        assert!(article.in_category("Technology"));
        assert!(!article.in_category("Health"));
    }
}
