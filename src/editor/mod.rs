//! Article drafts: the editor's view of an article before it is published.
//!
//! A [`Draft`] turns into a markdown file with a frontmatter header via
//! [`Draft::to_markdown`], and back via [`Draft::from_record`].

mod slug;

pub use slug::slugify;

use crate::frontmatter::{FrontmatterRecord, FrontmatterValue};
use crate::page::DEFAULT_AUTHOR;
use crate::utils::date::DateTimeUtc;
use thiserror::Error;

/// Reasons a draft cannot be published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please enter an article title.")]
    MissingTitle,
    #[error("Please select a category.")]
    MissingCategory,
    #[error("Please write some content.")]
    MissingContent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub category: String,
    pub author: String,
    pub tags: Vec<String>,
    /// `YYYY-MM-DD`
    pub publish_date: String,
    pub excerpt: String,
    pub featured_score: i64,
    pub thumbnail: String,
    pub youtube_url: String,
    pub bg_color: String,
    pub accent_color: String,
    pub font_style: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            content: String::new(),
            category: String::new(),
            author: DEFAULT_AUTHOR.into(),
            tags: Vec::new(),
            publish_date: DateTimeUtc::now().to_ymd(),
            excerpt: String::new(),
            featured_score: 50,
            thumbnail: String::new(),
            youtube_url: String::new(),
            bg_color: "white".into(),
            accent_color: "blue".into(),
            font_style: "system".into(),
        }
    }
}

impl Draft {
    /// Check required fields, generating the slug from the title when blank.
    pub fn finalize(mut self) -> Result<Self, DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.slug.trim().is_empty() {
            self.slug = slugify(&self.title);
        }
        if self.category.trim().is_empty() {
            return Err(DraftError::MissingCategory);
        }
        if self.content.trim().is_empty() {
            return Err(DraftError::MissingContent);
        }
        Ok(self)
    }

    /// Frontmatter record in publishing key order.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_record(&self) -> FrontmatterRecord {
        let mut record = FrontmatterRecord::new();
        record.insert("title", self.title.as_str());
        record.insert("slug", self.slug.as_str());
        record.insert("author", self.author.as_str());
        record.insert("category", self.category.as_str());
        record.insert("tags", self.tags.clone());
        record.insert("publish_date", self.publish_date.as_str());
        record.insert("featured_score", self.featured_score as f64);
        record.insert("background_color", self.bg_color.as_str());
        record.insert("page_accent", self.accent_color.as_str());
        record.insert("font_style", self.font_style.as_str());
        record.insert("thumbnail", self.thumbnail.as_str());
        record.insert("excerpt", self.excerpt.as_str());
        record.insert("youtube_url", self.youtube_url.as_str());
        record
    }

    /// Full article file: header, a blank line, then the content.
    pub fn to_markdown(&self) -> String {
        format!("{}\n{}", self.to_record().to_header(), self.content)
    }

    /// Recover a draft from a parsed article file. Missing fields keep
    /// their defaults.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_record(record: &FrontmatterRecord, body: &str) -> Self {
        let mut draft = Self::default();
        let text = |key: &str, slot: &mut String| {
            if let Some(value) = record.text(key) {
                *slot = value;
            }
        };

        text("title", &mut draft.title);
        text("slug", &mut draft.slug);
        text("author", &mut draft.author);
        text("category", &mut draft.category);
        text("publish_date", &mut draft.publish_date);
        text("excerpt", &mut draft.excerpt);
        text("thumbnail", &mut draft.thumbnail);
        text("youtube_url", &mut draft.youtube_url);
        text("background_color", &mut draft.bg_color);
        text("page_accent", &mut draft.accent_color);
        text("font_style", &mut draft.font_style);

        draft.tags = match record.get("tags") {
            Some(FrontmatterValue::List(tags)) => tags.clone(),
            Some(FrontmatterValue::String(s)) => split_tags(s),
            _ => Vec::new(),
        };
        if let Some(score) = record.number("featured_score").filter(|n| n.is_finite()) {
            draft.featured_score = score as i64;
        }

        draft.content = body.strip_prefix('\n').unwrap_or(body).to_string();
        draft
    }

    /// File name under the content directory.
    pub fn file_name(&self) -> String {
        format!("{}.md", self.slug)
    }
}

/// Comma-separated tag input, trimmed, blanks dropped.
pub fn split_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
