//! `[categories.<slug>]` tables.
//!
//! ```toml
//! [categories.technology]
//! name = "Technology"
//! description = "Explore the latest in tech."
//! seo_text = "Longer copy shown at the bottom of the category page."
//! ```
//!
//! Declaring any category replaces the built-in set. Document order is kept
//! and drives the category page order and the sitemap.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    pub name: String,
    pub description: String,
    pub seo_text: String,
}

/// Ordered slug → category table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoriesConfig(Vec<(String, CategoryConfig)>);

impl CategoriesConfig {
    pub const SECTION: FieldPath = FieldPath::new("categories");

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryConfig)> {
        self.0.iter().map(|(slug, c)| (slug.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&CategoryConfig> {
        self.0.iter().find(|(s, _)| s == slug).map(|(_, c)| c)
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(slug, _)| slug.as_str())
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (slug, category) in &self.0 {
            if category.name.trim().is_empty() {
                diag.error(Self::SECTION, format!("category `{slug}` has no name"));
            }
        }
    }
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        let entry = |slug: &str, name: &str, description: &str, seo_text: &str| {
            (
                slug.to_string(),
                CategoryConfig {
                    name: name.into(),
                    description: description.into(),
                    seo_text: seo_text.into(),
                },
            )
        };

        Self(vec![
            entry(
                "technology",
                "Technology",
                "Explore the latest in tech, AI, software development, and digital innovation.",
                "Stay ahead of the curve with our technology articles covering everything from artificial intelligence and machine learning to software development best practices. Our expert writers analyze trends, review tools, and provide actionable insights for tech professionals and enthusiasts alike.",
            ),
            entry(
                "business",
                "Business",
                "Insights on entrepreneurship, management, finance, and business growth strategies.",
                "Whether you're launching a startup or scaling an enterprise, our business content delivers the strategies you need. From financial planning and team management to market analysis and growth hacking, we provide expert guidance for every stage of your business journey.",
            ),
            entry(
                "lifestyle",
                "Lifestyle",
                "Tips for living your best life, from wellness to productivity and beyond.",
                "Transform your daily life with our lifestyle articles. Covering mindfulness, productivity, relationships, personal development, and more, we help you build habits that lead to a more fulfilling life. Practical advice backed by research and real-world experience.",
            ),
            entry(
                "movies",
                "Movies",
                "Film analysis, industry insights, and the art of screenwriting.",
                "Dive deep into the world of cinema with our movies section. From script analysis and filmmaking techniques to industry trends and reviews, we cover all aspects of the film industry for creators and cinephiles alike.",
            ),
            entry(
                "health",
                "Health",
                "Evidence-based advice for physical and mental well-being.",
                "Your health is your wealth. Our health articles provide science-backed guidance on nutrition, fitness, mental health, sleep, and preventive care. Written by experts, designed for real people looking to improve their well-being.",
            ),
        ])
    }
}

impl Serialize for CategoriesConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (slug, category) in &self.0 {
            map.serialize_entry(slug, category)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoriesConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = CategoriesConfig;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a table of category tables")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, CategoryConfig)> = Vec::new();
                while let Some((slug, category)) = map.next_entry::<String, CategoryConfig>()? {
                    match entries.iter_mut().find(|(s, _)| *s == slug) {
                        Some(slot) => slot.1 = category,
                        None => entries.push((slug, category)),
                    }
                }
                Ok(CategoriesConfig(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_categories() {
        let config = test_parse_config("");
        let slugs: Vec<_> = config.categories.slugs().collect();
        assert_eq!(slugs, ["technology", "business", "lifestyle", "movies", "health"]);
        assert_eq!(config.categories.get("movies").map(|c| c.name.as_str()), Some("Movies"));
    }

    #[test]
    fn test_custom_categories_replace_defaults_in_order() {
        let config = test_parse_config(
            "[categories.rust]\nname = \"Rust\"\n[categories.cooking]\nname = \"Cooking\"\ndescription = \"Food\"",
        );
        let slugs: Vec<_> = config.categories.slugs().collect();
        assert_eq!(slugs, ["rust", "cooking"]);
        assert_eq!(config.categories.get("cooking").unwrap().description, "Food");
        assert!(config.categories.get("technology").is_none());
    }

    #[test]
    fn test_unnamed_category_rejected() {
        let config = test_parse_config("[categories.misc]\ndescription = \"x\"");
        let mut diag = ConfigDiagnostics::new();
        config.categories.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
