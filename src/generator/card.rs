//! Blog cards: the article teaser used by related-article lists and
//! category pages.

use crate::page::Article;
use crate::utils::html::escape;
use std::fmt::Write;

/// HTML for one card.
pub fn blog_card(article: &Article) -> String {
    let title = escape(&article.title);
    let mut html = String::with_capacity(640);
    let _ = write!(
        html,
        r#"
        <div class="blog-card">
          <div class="blog-card-image">
            <img src="{thumbnail}" alt="{title}" loading="lazy">
            <span class="blog-card-category">{category}</span>
          </div>
          <div class="blog-card-body">
            <h3 class="blog-card-title">
              <a href="{url}">{title}</a>
            </h3>
            <p class="blog-card-excerpt">{excerpt}</p>
            <div class="blog-card-meta">
              <div class="blog-card-author">
                <span>{author}</span>
              </div>
              <div class="blog-card-date">{date}</div>
            </div>
          </div>
        </div>"#,
        thumbnail = escape(&article.thumbnail),
        category = escape(&article.category),
        url = escape(&article.url()),
        excerpt = escape(&article.excerpt),
        author = escape(&article.author),
        date = escape(&article.formatted_date),
    );
    html
}

/// Cards for `articles`, joined with newlines.
pub fn blog_cards<'a>(articles: impl IntoIterator<Item = &'a Article>) -> String {
    articles
        .into_iter()
        .map(blog_card)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_blog_card() {
        let config = test_parse_config("");
        let article = Article::from_source(
            "a.md",
            "---\ntitle: \"Tips & Tricks\"\nslug: tips\ncategory: Business\nexcerpt: Short\nthumbnail: /img/t.jpg\npublish_date: 2024-01-05\n---\n",
            &config,
        );
        let html = blog_card(&article);
        assert!(html.contains(r#"<img src="/img/t.jpg" alt="Tips &amp; Tricks" loading="lazy">"#));
        assert!(html.contains(r#"<a href="/articles/tips.html">Tips &amp; Tricks</a>"#));
        assert!(html.contains(r#"<span class="blog-card-category">Business</span>"#));
        assert!(html.contains(r#"<div class="blog-card-date">Jan 5, 2024</div>"#));
        assert!(html.contains("<span>Editorial Team</span>"));
    }

    #[test]
    fn test_blog_cards_joined() {
        let config = test_parse_config("");
        let a = Article::from_source("a.md", "", &config);
        let b = Article::from_source("b.md", "", &config);
        let html = blog_cards([&a, &b]);
        assert_eq!(html.matches(r#"<div class="blog-card">"#).count(), 2);
        assert!(html.contains("</div>\n\n        <div class=\"blog-card\">"));
        assert_eq!(blog_cards([]), "");
    }
}
