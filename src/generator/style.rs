//! Article style variables: named colors and font stacks.

const BACKGROUNDS: &[(&str, &str)] = &[
    ("white", "#ffffff"),
    ("gray", "#f9fafb"),
    ("cream", "#fefce8"),
    ("dark", "#0f172a"),
];

const ACCENTS: &[(&str, &str)] = &[
    ("blue", "#2563eb"),
    ("purple", "#7c3aed"),
    ("green", "#16a34a"),
    ("amber", "#d97706"),
    ("rose", "#e11d48"),
];

const FONTS: &[(&str, &str)] = &[
    ("system", "system-ui, -apple-system, sans-serif"),
    ("serif", "Georgia, Cambria, serif"),
    ("mono", "ui-monospace, monospace"),
];

fn lookup(table: &[(&str, &'static str)], name: &str) -> Option<&'static str> {
    table.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
}

/// Page background for `background_color`, white when unknown.
pub fn background(name: &str) -> &'static str {
    lookup(BACKGROUNDS, name).unwrap_or("#ffffff")
}

/// Accent color for `page_accent`, blue when unknown.
pub fn accent(name: &str) -> &'static str {
    lookup(ACCENTS, name).unwrap_or("#2563eb")
}

/// CSS font stack for `font_style`, the system stack when unknown.
pub fn font(name: &str) -> &'static str {
    lookup(FONTS, name).unwrap_or(FONTS[0].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(background("cream"), "#fefce8");
        assert_eq!(accent("rose"), "#e11d48");
        assert_eq!(font("serif"), "Georgia, Cambria, serif");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(background(""), "#ffffff");
        assert_eq!(background("blue"), "#ffffff");
        assert_eq!(accent("teal"), "#2563eb");
        assert_eq!(font("comic"), "system-ui, -apple-system, sans-serif");
    }
}
