//! URL slugs from article titles.

use deunicode::deunicode;

/// Slug for `title`: ASCII-transliterated, lowercase, with runs of
/// whitespace, `_` and `-` collapsed to one `-`.
///
/// Characters other than letters, digits and separators are dropped, and
/// no leading or trailing `-` is produced.
///
/// ```text
/// "Hello, World!"        -> "hello-world"
/// "  Rust_and -- Go  "   -> "rust-and-go"
/// "Café Crème"           -> "cafe-creme"
/// ```
pub fn slugify(title: &str) -> String {
    let ascii = deunicode(title).to_lowercase();
    let mut slug = String::with_capacity(ascii.len());
    let mut separator = false;

    for c in ascii.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if separator && !slug.is_empty() {
                slug.push('-');
            }
            separator = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '_' || c == '-' {
            separator = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("10 Tips for 2024"), "10-tips-for-2024");
    }

    #[test]
    fn test_separators_collapse() {
        assert_eq!(slugify("  Rust_and -- Go  "), "rust-and-go");
        assert_eq!(slugify("a & b"), "a-b");
        assert_eq!(slugify("a&b"), "ab");
        assert_eq!(slugify("--edge--"), "edge");
    }

    #[test]
    fn test_transliteration() {
        assert_eq!(slugify("Café Crème"), "cafe-creme");
        assert_eq!(slugify("Größe"), "grosse");
    }

    #[test]
    fn test_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
