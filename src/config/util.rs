//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find the config file by searching upward from the current directory.
///
/// ```text
/// /home/user/blog/src/content/articles/  ← cwd
/// /home/user/blog/blogi.toml             ← found
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.exists())
}

/// Site URL without trailing slashes, for joining with `/path` links.
pub fn base_url(url: &str) -> &str {
    url.trim_end_matches('/')
}

/// Expand `~` and resolve a relative path against `root`.
pub fn resolve_under(root: &Path, path: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    let path = PathBuf::from(expanded);
    if path.is_relative() {
        root.join(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        assert_eq!(base_url("https://blogi.com/"), "https://blogi.com");
        assert_eq!(base_url("https://blogi.com"), "https://blogi.com");
    }

    #[test]
    fn test_resolve_under() {
        let root = Path::new("/site");
        assert_eq!(resolve_under(root, Path::new("dist")), PathBuf::from("/site/dist"));
        assert_eq!(resolve_under(root, Path::new("/abs")), PathBuf::from("/abs"));
    }

    #[test]
    fn test_find_config_file_absolute_missing() {
        assert_eq!(find_config_file(Path::new("/definitely/not/here/blogi.toml")), None);
    }
}
