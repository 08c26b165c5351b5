//! `blogi new`: scaffold an article file from the command line.

use super::NewArgs;
use crate::{config::SiteConfig, editor::Draft, generator::write_file, log, page::DEFAULT_AUTHOR};
use anyhow::{Result, bail};
use std::path::PathBuf;

const PLACEHOLDER: &str = "Write your article here.\n";

/// Create `{content}/{slug}.md`. Returns the path written.
pub fn new_article(config: &SiteConfig, args: &NewArgs) -> Result<PathBuf> {
    let draft = Draft {
        title: args.title.clone(),
        slug: args.slug.clone().unwrap_or_default(),
        category: args.category.clone(),
        author: args.author.clone().unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        tags: args
            .tags
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
        content: PLACEHOLDER.to_string(),
        ..Default::default()
    }
    .finalize()?;

    if draft.slug.is_empty() {
        bail!("Cannot derive a slug from `{}`, pass --slug", draft.title);
    }

    let known = config
        .categories
        .iter()
        .any(|(_, c)| c.name.eq_ignore_ascii_case(&draft.category));
    if !known {
        log!("new"; "warning: `{}` is not a configured category", draft.category);
    }

    let path = config.build.content.join(draft.file_name());
    if path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config.root_relative(&path).display()
        );
    }

    write_file(&path, draft.to_markdown().as_bytes())?;
    log!("new"; "created {}", config.root_relative(&path).display());
    Ok(path)
}
