//! URL to filesystem path resolution.

use crate::utils::path::join_within;
use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};

/// Resolve a request URL below `serve_root`.
///
/// Directories serve their `index.html`, and `/write` falls back to
/// `write.html`. Anything that escapes the root, including through
/// symlinks, resolves to `None`.
pub fn resolve_path(url: &str, serve_root: &Path) -> Option<PathBuf> {
    let clean = normalize_url(url);
    let local = join_within(serve_root, &clean)?;
    let root = serve_root.canonicalize().ok()?;

    let within = |path: &Path| -> Option<PathBuf> {
        let canonical = path.canonicalize().ok()?;
        canonical.starts_with(&root).then_some(canonical)
    };

    if let Some(found) = within(&local) {
        if found.is_file() {
            return Some(found);
        }
        if found.is_dir() {
            return within(&found.join("index.html")).filter(|p| p.is_file());
        }
    }

    if clean.is_empty() || Path::new(&clean).extension().is_some() {
        return None;
    }
    within(&local.with_extension("html")).filter(|p| p.is_file())
}

/// Decode, strip query string and fragment, trim slashes.
pub fn normalize_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();
    decoded.trim_matches('/').to_string()
}
