//! RSS 2.0 feed of the most recent articles.

use super::{minify_xml, write_file};
use crate::{config::SiteConfig, log, page::Article, utils::date::DateTimeUtc};
use anyhow::{Result, anyhow};
use rss::{
    CategoryBuilder, ChannelBuilder, GuidBuilder, ItemBuilder,
    extension::atom::{AtomExtension, Link},
    validation::Validate,
};

/// Build the RSS feed if enabled.
pub fn build_feed(config: &SiteConfig, articles: &[Article]) -> Result<()> {
    if config.build.feed.enable {
        RssFeed::build(config, articles).write()?;
    }
    Ok(())
}

struct RssFeed<'a> {
    config: &'a SiteConfig,
    articles: &'a [Article],
    build_date: DateTimeUtc,
}

impl<'a> RssFeed<'a> {
    fn build(config: &'a SiteConfig, articles: &'a [Article]) -> Self {
        let count = config.build.feed_count.min(articles.len());
        Self {
            config,
            articles: &articles[..count],
            build_date: DateTimeUtc::now(),
        }
    }

    fn into_xml(self) -> Result<String> {
        let site = &self.config.site;
        let items: Vec<_> = self
            .articles
            .iter()
            .map(|article| article_to_rss_item(article, self.config))
            .collect();

        let mut self_link = Link::default();
        self_link.set_href(self.feed_url());
        self_link.set_rel("self");
        self_link.set_mime_type(Some("application/rss+xml".to_string()));
        let mut atom = AtomExtension::default();
        atom.set_links(vec![self_link]);

        let channel = ChannelBuilder::default()
            .title(&site.title)
            .link(crate::config::base_url(&site.url))
            .description(&site.description)
            .language(site.language.clone())
            .last_build_date(self.build_date.to_rfc2822())
            .atom_ext(atom)
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
        Ok(channel.to_string())
    }

    fn feed_url(&self) -> String {
        let path = self.config.build.feed.path.to_string_lossy().replace('\\', "/");
        self.config.absolute_url(&format!("/{}", path.trim_start_matches('/')))
    }

    fn write(self) -> Result<()> {
        let minify = self.config.build.minify;
        let rss_path = self.config.build.output.join(&self.config.build.feed.path);
        let xml = self.into_xml()?;
        let xml = minify_xml(xml.as_bytes(), minify);

        write_file(&rss_path, &xml)?;

        log!("rss"; "{}", rss_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

fn article_to_rss_item(article: &Article, config: &SiteConfig) -> rss::Item {
    let link = config.absolute_url(&article.url());
    let pub_date = article.date().map(DateTimeUtc::to_rfc2822);
    let categories = (!article.category.is_empty())
        .then(|| CategoryBuilder::default().name(article.category.clone()).build())
        .into_iter()
        .collect::<Vec<_>>();

    ItemBuilder::default()
        .title(Some(article.title.clone()))
        .link(Some(link.clone()))
        .guid(Some(GuidBuilder::default().permalink(true).value(link).build()))
        .pub_date(pub_date)
        .description(Some(article.excerpt.clone()))
        .categories(categories)
        .build()
}
