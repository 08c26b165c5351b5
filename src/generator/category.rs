//! Category pages, one per configured category, written to
//! `{output}/categories/{slug}.html`.

use super::{card::blog_cards, template::Vars, write_file};
use crate::config::{CategoryConfig, SiteConfig};
use crate::embed::build::{CATEGORY_HTML, CategoryVars};
use crate::page::Article;
use crate::utils::{date::DateTimeUtc, html::escape, plural::plural_count};
use crate::debug;
use anyhow::Result;

/// Generate all category pages. Returns the number written.
pub fn build_categories(config: &SiteConfig, articles: &[Article]) -> Result<usize> {
    let output_dir = config.build.output.join("categories");
    let year = DateTimeUtc::now().year;

    for (slug, category) in config.categories.iter() {
        let members: Vec<&Article> = articles
            .iter()
            .filter(|a| a.in_category(&category.name))
            .collect();

        let html = render_category(config, slug, category, &members, year);
        write_file(&output_dir.join(format!("{slug}.html")), html.as_bytes())?;
        debug!("categories"; "categories/{slug}.html ({})", members.len());
    }

    Ok(config.categories.len())
}

/// Render one category page.
pub fn render_category(
    config: &SiteConfig,
    slug: &str,
    category: &CategoryConfig,
    articles: &[&Article],
    year: u16,
) -> String {
    let mut vars = Vars::new();
    vars.set("site_title", escape(&config.site.title))
        .set("name", escape(&category.name))
        .set("description", escape(&category.description))
        .set("seo_text", escape(&category.seo_text))
        .set("nav_links", nav_links(config, slug))
        .set("article_count", plural_count(articles.len(), "article"))
        .set("articles", blog_cards(articles.iter().copied()))
        .set("year", year.to_string());

    CATEGORY_HTML.render(&CategoryVars { vars })
}

/// Header navigation with the current category marked active.
fn nav_links(config: &SiteConfig, current: &str) -> String {
    config
        .categories
        .iter()
        .map(|(slug, category)| {
            let active = if slug == current { " active" } else { "" };
            format!(
                r#"<li><a href="/categories/{slug}.html" class="nav-link{active}">{}</a></li>"#,
                escape(&category.name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_at;
    use std::fs;

    fn article(slug: &str, category: &str, config: &SiteConfig) -> Article {
        let source = format!("---\ntitle: \"{slug}\"\nslug: {slug}\ncategory: {category}\n---\nbody");
        Article::from_source(&format!("{slug}.md"), &source, config)
    }

    #[test]
    fn test_render_category() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config_at(dir.path(), "");
        let a = article("gpu", "technology", &config);
        let category = config.categories.get("technology").unwrap();

        let html = render_category(&config, "technology", category, &[&a], 2026);
        assert!(html.contains("<title>Technology Articles | Blogi</title>"));
        assert!(html.contains("<h1>Technology</h1>"));
        assert!(html.contains("All Technology Articles"));
        assert!(html.contains("1 article in this category"));
        assert!(html.contains(r#"<a href="/articles/gpu.html">gpu</a>"#));
        assert!(html.contains(r#"href="/categories/technology.html" class="nav-link active""#));
        assert!(html.contains(r#"href="/categories/health.html" class="nav-link""#));
        assert!(html.contains("About Technology"));
        assert!(html.contains("&copy; 2026 Blogi."));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_build_categories_matches_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config_at(dir.path(), "");
        let articles = vec![
            article("a", "Business", &config),
            article("b", "BUSINESS", &config),
            article("c", "Health", &config),
        ];

        assert_eq!(build_categories(&config, &articles).unwrap(), 5);

        let business = fs::read_to_string(config.build.output.join("categories/business.html")).unwrap();
        assert!(business.contains("2 articles in this category"));
        assert!(business.contains("/articles/a.html"));
        assert!(business.contains("/articles/b.html"));
        assert!(!business.contains("/articles/c.html"));

        let movies = fs::read_to_string(config.build.output.join("categories/movies.html")).unwrap();
        assert!(movies.contains("0 articles in this category"));
    }
}
