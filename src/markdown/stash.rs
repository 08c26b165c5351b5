//! Protected fragments kept out of later stages.
//!
//! A stage that emits final HTML (code blocks, inline code) pushes it into
//! the [`Stash`] and leaves a placeholder in the text. Placeholders are built
//! from private-use characters and digits only, so no later pattern can
//! match inside them.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Opens a block-level placeholder.
pub const BLOCK_OPEN: char = '\u{E000}';
/// Opens an inline placeholder.
pub const INLINE_OPEN: char = '\u{E002}';
/// Closes either kind of placeholder.
pub const CLOSE: char = '\u{E001}';

static RE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\u{E000}\u{E002}]([0-9]+)\u{E001}").unwrap());

#[derive(Debug, Default)]
pub struct Stash {
    fragments: Vec<String>,
}

impl Stash {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Stash a block-level fragment and return its placeholder.
    pub fn block(&mut self, html: String) -> String {
        self.push(BLOCK_OPEN, html)
    }

    /// Stash an inline fragment and return its placeholder.
    pub fn inline(&mut self, html: String) -> String {
        self.push(INLINE_OPEN, html)
    }

    fn push(&mut self, open: char, html: String) -> String {
        let index = self.fragments.len();
        self.fragments.push(html);
        format!("{open}{index}{CLOSE}")
    }

    /// Replace every placeholder with its stashed fragment.
    ///
    /// Unknown indices are left in place.
    pub fn restore(&self, text: &str) -> String {
        if self.fragments.is_empty() {
            return text.to_string();
        }
        RE_PLACEHOLDER
            .replace_all(text, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| self.fragments.get(i))
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

/// Whether `text` begins with a block-level placeholder.
pub fn starts_with_block(text: &str) -> bool {
    text.starts_with(BLOCK_OPEN)
}

/// Replace placeholder characters that appear in source text.
pub fn neutralize(text: &str) -> String {
    text.replace([BLOCK_OPEN, INLINE_OPEN, CLOSE], "\u{FFFD}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_restore() {
        let mut stash = Stash::new();
        let a = stash.block("<pre>a</pre>".into());
        let b = stash.inline("<code>b</code>".into());
        assert_eq!(stash.len(), 2);
        assert!(starts_with_block(&a));
        assert!(!starts_with_block(&b));

        let text = format!("{a}\nsee {b}");
        assert_eq!(stash.restore(&text), "<pre>a</pre>\nsee <code>b</code>");
    }

    #[test]
    fn test_unknown_index_kept() {
        let mut stash = Stash::new();
        stash.inline("x".into());
        let text = format!("{INLINE_OPEN}9{CLOSE}");
        assert_eq!(stash.restore(&text), text);
    }

    #[test]
    fn test_neutralize() {
        let text = format!("a{BLOCK_OPEN}0{CLOSE}b");
        assert_eq!(neutralize(&text), "a\u{FFFD}0\u{FFFD}b");
    }
}
