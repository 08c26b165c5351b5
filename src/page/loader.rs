//! Content directory scanning.

use super::Article;
use crate::config::SiteConfig;
use crate::{debug, log};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

/// Load every `*.md` file in the content directory, newest first.
///
/// A missing content directory is not an error: the site simply has no
/// articles.
pub fn load_articles(config: &SiteConfig) -> Result<Vec<Article>> {
    let dir = &config.build.content;
    if !dir.is_dir() {
        log!("content"; "no content directory found at {}", config.root_relative(dir).display());
        return Ok(Vec::new());
    }

    let files = markdown_files(dir)?;
    debug!("content"; "found {} markdown files", files.len());

    let mut articles = files
        .par_iter()
        .map(|path| load_one(path, config))
        .collect::<Result<Vec<_>>>()?;

    sort_newest_first(&mut articles);
    Ok(articles)
}

/// Sort by `publish_date`, newest first. Articles without a parseable date
/// go last, in their existing order.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| match (a.date(), b.date()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Markdown files directly inside `dir`, sorted by name.
fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn load_one(path: &Path, config: &SiteConfig) -> Result<Article> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read article {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Article::from_source(&file_name, &source, config))
}
