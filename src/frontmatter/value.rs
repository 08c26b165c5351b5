//! Frontmatter value types and scalar classification.

use std::fmt;

/// A single frontmatter value.
#[derive(Debug, Clone, PartialEq)]
pub enum FrontmatterValue {
    String(String),
    Number(f64),
    List(Vec<String>),
}

impl FrontmatterValue {
    /// Classify a trimmed raw value: list, then number, then string.
    pub fn classify(raw: &str) -> Self {
        if raw.starts_with('[') && raw.ends_with(']') && raw.len() >= 2 {
            let inner = &raw[1..raw.len() - 1];
            if inner.trim().is_empty() {
                return Self::List(Vec::new());
            }
            let items = inner
                .split(',')
                .map(|item| strip_quotes(item.trim()).to_string())
                .collect();
            return Self::List(items);
        }

        if let Some(n) = parse_number(raw) {
            return Self::Number(n);
        }

        Self::String(strip_quotes(raw).to_string())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Render the value as display text, the way a template would show it.
    ///
    /// Lists are joined with `", "`.
    pub fn to_text(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Number(n) => format_number(*n),
            Self::List(items) => items.join(", "),
        }
    }

    /// Serialize back to header syntax.
    pub fn to_header_value(&self) -> String {
        match self {
            Self::String(s) => format!("\"{s}\""),
            Self::Number(n) => format_number(*n),
            Self::List(items) => {
                let quoted: Vec<_> = items.iter().map(|i| format!("\"{i}\"")).collect();
                format!("[{}]", quoted.join(", "))
            }
        }
    }
}

impl fmt::Display for FrontmatterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for FrontmatterValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for FrontmatterValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<f64> for FrontmatterValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<Vec<String>> for FrontmatterValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

// ============================================================================
// Scalar helpers
// ============================================================================

/// Strip one leading and one trailing quote character (`"` or `'`).
///
/// Each end is handled independently, so `"abc` becomes `abc`.
pub fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix(['"', '\'']).unwrap_or(s);
    s.strip_suffix(['"', '\'']).unwrap_or(s)
}

/// Parse a complete numeric literal.
///
/// Accepts signed decimals with optional exponent, `0x`/`0o`/`0b`
/// integers and `Infinity`. Empty input and words such as `NaN` or `inf`
/// are rejected.
#[allow(clippy::cast_precision_loss)]
pub fn parse_number(s: &str) -> Option<f64> {
    if s.is_empty() {
        return None;
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            // from_str_radix takes a leading sign, literals do not
            if digits.starts_with(['+', '-']) {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    // Rust's float grammar also accepts "inf" and "nan"; restrict to digits
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    if !s.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    s.parse::<f64>().ok()
}

/// Format a number without a trailing `.0` for integral values.
#[allow(clippy::cast_possible_truncation)]
pub fn format_number(n: f64) -> String {
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
