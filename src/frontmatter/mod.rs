//! Frontmatter parsing for markdown articles.
//!
//! A document may start with a header block:
//!
//! ```text
//! ---
//! title: "Hello"
//! tags: ["rust", "web"]
//! featured_score: 70
//! ---
//! Body text...
//! ```
//!
//! [`parse`] splits such a document into a [`FrontmatterRecord`] and the
//! markdown body. A missing or malformed header is not an error: the record
//! is empty and the whole input is the body.

mod value;

pub use value::{FrontmatterValue, format_number, parse_number, strip_quotes};

use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

/// Header fence: `---\n<header>\n---\n<body>`, first closing fence wins.
static RE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A---\n((?s:.*?))\n---\n((?s:.*))\z").unwrap());

/// Ordered key/value record parsed from a header block.
///
/// Keys keep their first-seen position; a repeated key overwrites the
/// earlier value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontmatterRecord {
    entries: Vec<(String, FrontmatterValue)>,
}

impl FrontmatterRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&FrontmatterValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Get a value as display text (numbers and lists are formatted).
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(FrontmatterValue::to_text)
    }

    /// Get a list value. Scalar strings are not split.
    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(FrontmatterValue::as_list)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(FrontmatterValue::as_number)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FrontmatterValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrontmatterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize to a header block, including both fences and a trailing
    /// newline.
    pub fn to_header(&self) -> String {
        let mut out = String::from("---\n");
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(&value.to_header_value());
            out.push('\n');
        }
        out.push_str("---\n");
        out
    }

    /// Parse the lines of a header block (without fences).
    fn from_header(header: &str) -> Self {
        let mut record = Self::new();
        for line in header.split('\n') {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            record.insert(key.trim(), FrontmatterValue::classify(value.trim()));
        }
        record
    }
}

/// Convert CRLF and lone CR line endings to LF.
pub fn normalize_newlines(s: &str) -> Cow<'_, str> {
    if !s.contains('\r') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Split a document into its frontmatter record and markdown body.
///
/// Without a well-formed header the input is returned untouched as body.
pub fn parse(raw: &str) -> (FrontmatterRecord, String) {
    let normalized = normalize_newlines(raw);

    match RE_HEADER.captures(&normalized) {
        Some(caps) => {
            let record = FrontmatterRecord::from_header(&caps[1]);
            (record, caps[2].to_string())
        }
        None => (FrontmatterRecord::new(), raw.to_string()),
    }
}

/// Join a record and body back into a document.
pub fn compose(record: &FrontmatterRecord, body: &str) -> String {
    let mut out = record.to_header();
    out.push_str(body);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_header() {
        let (record, body) = parse("no header here");
        assert!(record.is_empty());
        assert_eq!(body, "no header here");
    }

    #[test]
    fn test_tags_and_score() {
        let (record, body) = parse("---\ntags: [\"a\", \"b\"]\nscore: 7\n---\nBody");
        assert_eq!(record.len(), 2);
        assert_eq!(record.list("tags"), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(record.number("score"), Some(7.0));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_crlf_and_cr_normalized() {
        let (record, body) = parse("---\r\ntitle: Hi\r\n---\r\nline1\r\nline2");
        assert_eq!(record.text("title").as_deref(), Some("Hi"));
        assert_eq!(body, "line1\nline2");

        let (record, body) = parse("---\rtitle: Hi\r---\rBody");
        assert_eq!(record.text("title").as_deref(), Some("Hi"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_no_header_keeps_raw_line_endings() {
        let (record, body) = parse("plain\r\ntext");
        assert!(record.is_empty());
        assert_eq!(body, "plain\r\ntext");
    }

    #[test]
    fn test_header_must_start_at_first_char() {
        let raw = "\n---\ntitle: x\n---\nBody";
        let (record, body) = parse(raw);
        assert!(record.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_unclosed_header() {
        let raw = "---\ntitle: x\nBody";
        let (record, body) = parse(raw);
        assert!(record.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_closing_fence_needs_newline() {
        let raw = "---\ntitle: x\n---";
        let (record, _) = parse(raw);
        assert!(record.is_empty());
    }

    #[test]
    fn test_first_closing_fence_wins() {
        let (record, body) = parse("---\na: 1\n---\nintro\n---\nmore");
        assert_eq!(record.len(), 1);
        assert_eq!(body, "intro\n---\nmore");
    }

    #[test]
    fn test_empty_value_is_empty_string() {
        let (record, _) = parse("---\nsubtitle:\nblank:    \n---\n");
        assert_eq!(record.get("subtitle"), Some(&FrontmatterValue::String(String::new())));
        assert_eq!(record.get("blank"), Some(&FrontmatterValue::String(String::new())));
    }

    #[test]
    fn test_lines_without_colon_ignored() {
        let (record, _) = parse("---\njust text\ntitle: Hi\n---\n");
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let (record, _) = parse("---\nthumbnail: https://x.com/a.png\n---\n");
        assert_eq!(record.text("thumbnail").as_deref(), Some("https://x.com/a.png"));
    }

    #[test]
    fn test_key_is_trimmed() {
        let (record, _) = parse("---\n  title  :  \"Hello\"  \n---\n");
        assert_eq!(record.text("title").as_deref(), Some("Hello"));
    }

    #[test]
    fn test_repeated_key_overwrites_in_place() {
        let (record, _) = parse("---\na: 1\nb: 2\na: 3\n---\n");
        let keys: Vec<_> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(record.number("a"), Some(3.0));
    }

    #[test]
    fn test_round_trip() {
        let raw = "---\ntitle: 'Hello World'\ntags: [a, 'b c']\nfeatured_score: 70\nsubtitle:\n---\n\n# Body\n";
        let (record, body) = parse(raw);

        let reparsed = parse(&compose(&record, &body));
        assert_eq!(reparsed.0, record);
        assert_eq!(reparsed.1, body);
    }

    #[test]
    fn test_to_header_format() {
        let mut record = FrontmatterRecord::new();
        record.insert("title", "Hi");
        record.insert("score", 7.0);
        record.insert("tags", vec!["x".to_string()]);
        assert_eq!(
            record.to_header(),
            "---\ntitle: \"Hi\"\nscore: 7\ntags: [\"x\"]\n---\n"
        );
    }
}
