//! `blogi publish`: push a local article through the publish service.

use crate::{
    auth::now_secs,
    config::SiteConfig,
    editor::{Draft, slugify},
    frontmatter, log,
    publish::{PublishRequest, PublishResponse, PublishService},
};
use anyhow::{Context, Result, anyhow, bail};
use std::fs;
use std::path::Path;

/// Build the request for `file`. The slug comes from the frontmatter, then
/// the title, then the file name.
pub fn request_for(file: &Path, password: &str) -> Result<PublishRequest> {
    let markdown = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let (record, body) = frontmatter::parse(&markdown);
    let draft = Draft::from_record(&record, &body);

    let slug = [draft.slug.clone(), slugify(&draft.title)]
        .into_iter()
        .chain(file.file_stem().map(|s| slugify(&s.to_string_lossy())))
        .find(|s| !s.is_empty())
        .unwrap_or_default();

    Ok(PublishRequest {
        slug,
        markdown,
        title: draft.title,
        password: password.to_string(),
    })
}

pub fn publish_file(config: &SiteConfig, file: &Path, password: Option<&str>) -> Result<PublishResponse> {
    let Some(password) = password else {
        bail!("A password is required (--password or BLOGI_PUBLISH_PASSWORD)");
    };

    let request = request_for(file, password)?;
    let service = PublishService::from_config(config);
    let response = service
        .handle(&request, now_secs())
        .map_err(|e| anyhow!("publish failed ({}): {e}", e.status()))?;

    log!("publish"; "{} -> {}", response.message, response.url);
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_at;
    use tempfile::TempDir;

    #[test]
    fn test_request_slug_sources() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("My Post.md");

        fs::write(&file, "---\ntitle: Big News\nslug: custom\n---\n\nx").unwrap();
        assert_eq!(request_for(&file, "pw").unwrap().slug, "custom");

        fs::write(&file, "---\ntitle: Big News\n---\n\nx").unwrap();
        let request = request_for(&file, "pw").unwrap();
        assert_eq!(request.slug, "big-news");
        assert_eq!(request.title, "Big News");

        fs::write(&file, "no header").unwrap();
        assert_eq!(request_for(&file, "pw").unwrap().slug, "my-post");
    }

    #[test]
    fn test_publish_into_project() {
        let dir = TempDir::new().unwrap();
        let config = test_config_at(dir.path(), "[publish]\npassword = \"secret\"");
        let file = dir.path().join("draft.md");
        fs::write(&file, "---\ntitle: Launch Day\n---\n\nHello").unwrap();

        let response = publish_file(&config, &file, Some("secret")).unwrap();
        assert_eq!(response.url, "/articles/launch-day.html");
        assert!(dir.path().join("src/content/articles/launch-day.md").is_file());
        assert!(dir.path().join(".blogi/auth.json").is_file());
    }

    #[test]
    fn test_publish_requires_password() {
        let dir = TempDir::new().unwrap();
        let config = test_config_at(dir.path(), "[publish]\npassword = \"secret\"");
        let file = dir.path().join("draft.md");
        fs::write(&file, "# x").unwrap();

        assert!(publish_file(&config, &file, None).is_err());
        let err = publish_file(&config, &file, Some("wrong")).unwrap_err();
        assert!(err.to_string().contains("401"));
    }
}
