//! Files copied verbatim: the homepage, stylesheets, scripts and the editor
//! page.
//!
//! ```text
//! {templates}/index.html  → {output}/index.html
//! {css}/**                → {output}/src/css/**
//! {js}/**                 → {output}/src/js/**
//! {templates}/write.html  → {output}/write.html
//! ```

use crate::config::SiteConfig;
use crate::{debug, log};
use anyhow::{Context, Result};
use jwalk::WalkDir;
use std::fs;
use std::path::{Path, PathBuf};

/// Skipped when copying directories.
const IGNORED_FILES: &[&str] = &[".DS_Store", "Thumbs.db"];

/// Copy `{templates}/index.html`. Returns whether it existed.
pub fn copy_homepage(config: &SiteConfig) -> Result<bool> {
    let source = config.build.templates.join("index.html");
    if !source.is_file() {
        log!("home"; "homepage template not found");
        return Ok(false);
    }
    copy_file(&source, &config.build.output.join("index.html"))?;
    Ok(true)
}

/// Copy stylesheets, scripts and the editor page. Returns the number of
/// files copied.
pub fn copy_static_assets(config: &SiteConfig) -> Result<usize> {
    let src = config.build.output.join("src");
    let mut copied = copy_dir(&config.build.css, &src.join("css"))?;
    copied += copy_dir(&config.build.js, &src.join("js"))?;

    let write_page = config.build.templates.join("write.html");
    if write_page.is_file() {
        copy_file(&write_page, &config.build.output.join("write.html"))?;
        copied += 1;
    }

    Ok(copied)
}

/// Copy every file below `from` into `to`, keeping relative paths. A missing
/// source directory copies nothing.
fn copy_dir(from: &Path, to: &Path) -> Result<usize> {
    if !from.is_dir() {
        debug!("assets"; "skipping missing {}", from.display());
        return Ok(0);
    }

    let files: Vec<PathBuf> = WalkDir::new(from)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .collect();

    for file in &files {
        let relative = file.strip_prefix(from).unwrap_or(file);
        copy_file(file, &to.join(relative))?;
    }
    Ok(files.len())
}

fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(from, to)
        .with_context(|| format!("Failed to copy {} to {}", from.display(), to.display()))?;
    Ok(())
}
