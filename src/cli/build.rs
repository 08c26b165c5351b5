//! Site building orchestration.
//!
//! Build pipeline phases:
//! - **Init** - Clean (optional) and create the output directory
//! - **Load** - Parse and render every markdown article
//! - **Pages** - Article pages, category pages, homepage
//! - **Assets** - Stylesheets, scripts, the editor page
//! - **Index** - Sitemap and RSS feed, generated in parallel

use crate::{
    config::SiteConfig,
    generator::{article, assets, category, feed::build_feed, sitemap::build_sitemap},
    log,
    logger::ProgressLine,
    page::{Article, load_articles},
    utils::plural::plural_count,
};
use anyhow::{Context, Result};
use std::fs;

/// What a build produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    pub articles: usize,
    pub categories: usize,
    pub homepage: bool,
    pub assets: usize,
}

/// Build the entire site.
///
/// Pipeline: init -> load -> pages -> assets -> index
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<BuildReport> {
    init_output(config)?;

    let articles = load_articles(config)?;
    let progress = (!quiet).then(|| ProgressLine::new(&[("articles", articles.len())]));

    let report = BuildReport {
        articles: article::build_articles(config, &articles, progress.as_ref())?,
        categories: category::build_categories(config, &articles)?,
        homepage: assets::copy_homepage(config)?,
        assets: assets::copy_static_assets(config)?,
    };

    if let Some(p) = progress {
        p.finish();
    }

    build_indexes(config, &articles)?;

    if !quiet {
        log!(
            "build";
            "{}, {} in {}",
            plural_count(report.articles, "article"),
            plural_count(report.categories, "category page"),
            config.root_relative(&config.build.output).display()
        );
    }

    Ok(report)
}

/// Clean (when requested) and create the output directory.
fn init_output(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;
    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean {}", output.display()))?;
        log!("build"; "cleaned {}", config.root_relative(output).display());
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create {}", output.display()))
}

/// Generate sitemap and feed in parallel.
fn build_indexes(config: &SiteConfig, articles: &[Article]) -> Result<()> {
    let (feed_result, sitemap_result) = rayon::join(
        || build_feed(config, articles),
        || build_sitemap(config, articles),
    );
    feed_result.context("Failed to build RSS feed")?;
    sitemap_result.context("Failed to build sitemap")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_at;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(
            root,
            "src/content/articles/first.md",
            "---\ntitle: First\ncategory: Technology\npublish_date: 2024-01-02\n---\n\n# Hi",
        );
        write(
            root,
            "src/content/articles/second.md",
            "---\ntitle: Second\ncategory: Health\npublish_date: 2024-03-04\n---\n\nBody",
        );
        write(
            root,
            "src/pages/articles/article-template.html",
            "<h1>{{title}}</h1>{{content}}",
        );
        write(root, "src/pages/index.html", "<html>home</html>");
        write(root, "src/pages/write.html", "<html>editor</html>");
        write(root, "src/css/main.css", "body{}");
        write(root, "src/js/write.js", "// editor");
        dir
    }

    #[test]
    fn test_full_build() {
        let dir = project();
        let config = test_config_at(dir.path(), "");
        let report = build_site(&config, true).unwrap();

        assert_eq!(report.articles, 2);
        assert_eq!(report.categories, 5);
        assert!(report.homepage);
        assert_eq!(report.assets, 3);

        let out = dir.path().join("dist");
        let first = fs::read_to_string(out.join("articles/first.html")).unwrap();
        assert!(first.contains("<h1>First</h1>"));
        assert!(first.contains("<h1>Hi</h1>"));
        assert!(out.join("categories/technology.html").is_file());
        assert!(out.join("index.html").is_file());
        assert!(out.join("write.html").is_file());
        assert!(out.join("src/css/main.css").is_file());
        assert!(out.join("sitemap.xml").is_file());
        assert!(out.join("rss.xml").is_file());
    }

    #[test]
    fn test_clean_removes_stale_output() {
        let dir = project();
        write(dir.path(), "dist/stale.html", "old");

        let mut config = test_config_at(dir.path(), "");
        build_site(&config, true).unwrap();
        assert!(dir.path().join("dist/stale.html").exists());

        config.build.clean = true;
        build_site(&config, true).unwrap();
        assert!(!dir.path().join("dist/stale.html").exists());
        assert!(dir.path().join("dist/index.html").exists());
    }

    #[test]
    fn test_empty_project_builds() {
        let dir = TempDir::new().unwrap();
        let config = test_config_at(dir.path(), "[build.feed]\nenable = false");
        let report = build_site(&config, true).unwrap();
        assert_eq!(report.articles, 0);
        assert!(!report.homepage);
        assert!(dir.path().join("dist/sitemap.xml").is_file());
        assert!(!dir.path().join("dist/rss.xml").exists());
    }
}
