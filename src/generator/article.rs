//! Article pages: `{templates}/articles/article-template.html` filled once
//! per article into `{output}/articles/{slug}.html`.

use super::{card::blog_cards, style, template::{Vars, render}, write_file};
use crate::config::SiteConfig;
use crate::logger::ProgressLine;
use crate::page::Article;
use crate::utils::{html::escape, path::join_within};
use crate::{debug, log};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Template location below the templates directory.
pub fn template_path(config: &SiteConfig) -> PathBuf {
    config.build.templates.join("articles").join("article-template.html")
}

/// Generate every article page. Returns the number written; a missing
/// template skips generation, and so does a slug that would leave
/// `{output}/articles`.
pub fn build_articles(
    config: &SiteConfig,
    articles: &[Article],
    progress: Option<&ProgressLine>,
) -> Result<usize> {
    let template_path = template_path(config);
    if !template_path.is_file() {
        log!("articles"; "template not found at {}, skipping", config.root_relative(&template_path).display());
        return Ok(0);
    }

    let template = fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read {}", template_path.display()))?;
    let output_dir = config.build.output.join("articles");

    let written = articles
        .par_iter()
        .map(|article| -> Result<bool> {
            let Some(path) = join_within(&output_dir, &format!("{}.html", article.slug)) else {
                log!("articles"; "skipping {}: slug `{}` leaves the output directory", article.file_name, article.slug);
                return Ok(false);
            };
            let html = render_article(&template, article, articles, config.build.related_count);
            write_file(&path, html.as_bytes())?;
            debug!("articles"; "articles/{}.html", article.slug);
            if let Some(progress) = progress {
                progress.inc("articles");
            }
            Ok(true)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(written.into_iter().filter(|&ok| ok).count())
}

/// Fill the article template for `article`.
///
/// Related articles are the first `related_count` other articles in
/// `all`, which is sorted newest first.
pub fn render_article(template: &str, article: &Article, all: &[Article], related_count: usize) -> String {
    let related = all
        .iter()
        .filter(|other| other.slug != article.slug)
        .take(related_count);

    let mut vars = article_vars(article);
    vars.block("tags", tag_links(&article.tags))
        .block("related_articles", blog_cards(related));
    render(template, &vars)
}

/// Template variables for one article. Text fields are HTML-escaped;
/// `content` is the rendered body.
pub fn article_vars(article: &Article) -> Vars {
    let mut vars = Vars::new();
    let text = |s: &str| escape(s).into_owned();

    vars.set("title", text(&article.title))
        .set("slug", text(&article.slug))
        .set("author", text(&article.author))
        .set("category", text(&article.category))
        .set("category_slug", text(&article.category_slug))
        .set("publish_date", text(&article.publish_date))
        .set("formatted_date", text(&article.formatted_date))
        .set("reading_time", article.reading_time.to_string())
        .set("excerpt", text(&article.excerpt))
        .set("thumbnail", text(&article.thumbnail))
        .set("author_avatar", text(&article.author_avatar))
        .set("content", article.html.clone())
        .set("meta_description", text(&article.excerpt))
        .set("keywords", text(&article.tags.join(", ")))
        .set("modified_date", text(&article.publish_date))
        .set("background_color", style::background(&article.background_color))
        .set("page_accent", style::accent(&article.page_accent))
        .set("font_style", style::font(&article.font_style));
    vars
}

/// `#tag` links, one per tag.
pub fn tag_links(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| {
            let tag = escape(tag);
            format!(r#"<a href="/tags/{tag}.html" class="article-tag">#{tag}</a>"#)
        })
        .collect::<Vec<_>>()
        .join("\n      ")
}
