//! `blogi preview`: render one markdown file to HTML.

use crate::{frontmatter, generator::write_file, log, markdown};
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Render the body of `file` (frontmatter stripped).
pub fn render_file(file: &Path) -> Result<String> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let (_, body) = frontmatter::parse(&source);
    Ok(markdown::render(&body))
}

/// Print the rendered HTML, or write it to `write` when given.
pub fn preview_file(file: &Path, write: Option<&Path>) -> Result<()> {
    let html = render_file(file)?;
    match write {
        Some(target) => {
            write_file(target, html.as_bytes())?;
            log!("preview"; "wrote {}", target.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{html}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_strips_frontmatter() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.md");
        fs::write(&file, "---\ntitle: A\n---\n\n## Sub\n\n**bold**").unwrap();

        let html = render_file(&file).unwrap();
        assert!(html.contains("<h2>Sub</h2>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(!html.contains("title:"));
    }

    #[test]
    fn test_write_target() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.md");
        fs::write(&file, "# T").unwrap();
        let target = dir.path().join("out/a.html");

        preview_file(&file, Some(&target)).unwrap();
        assert!(fs::read_to_string(target).unwrap().contains("<h1>T</h1>"));
    }

    #[test]
    fn test_missing_file() {
        assert!(render_file(Path::new("/nonexistent/blogi.md")).is_err());
    }
}
