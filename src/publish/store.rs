//! Versioned content storage.
//!
//! Writes are conditional on the version the caller last saw, so two
//! editors saving the same article cannot silently overwrite each other.

use super::StoreError;
use crate::utils::{hash, path::join_within};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Identifier of the stored content.
    pub id: String,
    pub message: String,
}

pub trait ContentStore: Send + Sync {
    /// Current version of `path`, `None` when it does not exist.
    fn version(&self, path: &str) -> Result<Option<String>, StoreError>;

    /// Write `content` to `path` if its version still equals `prior`.
    fn put(
        &self,
        path: &str,
        content: &str,
        message: &str,
        prior: Option<&str>,
    ) -> Result<Commit, StoreError>;
}

/// Files under a root directory, versioned by their BLAKE3 hash.
#[derive(Debug)]
pub struct FsStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, StoreError> {
        join_within(&self.root, path)
            .filter(|p| p != &self.root)
            .ok_or_else(|| StoreError::InvalidPath(path.to_string()))
    }

    fn read_version(file: &Path) -> Result<Option<String>, StoreError> {
        match fs::read(file) {
            Ok(bytes) => Ok(Some(hash::content_version(&bytes))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl ContentStore for FsStore {
    fn version(&self, path: &str) -> Result<Option<String>, StoreError> {
        Self::read_version(&self.resolve(path)?)
    }

    fn put(
        &self,
        path: &str,
        content: &str,
        message: &str,
        prior: Option<&str>,
    ) -> Result<Commit, StoreError> {
        let file = self.resolve(path)?;
        let _guard = self.write_lock.lock();

        let current = Self::read_version(&file)?;
        if current.as_deref() != prior {
            return Err(StoreError::Conflict { path: path.to_string() });
        }

        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file, content)?;

        Ok(Commit {
            id: hash::content_version(content),
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_then_update() {
        let dir = TempDir::new().unwrap();
        let store = FsStore::new(dir.path());

        assert_eq!(store.version("articles/a.md").unwrap(), None);
        let first = store.put("articles/a.md", "one", "Add", None).unwrap();
        assert_eq!(first.id, hash::content_version("one"));
        assert_eq!(store.version("articles/a.md").unwrap().as_deref(), Some(first.id.as_str()));

        let second = store
            .put("articles/a.md", "two", "Update", Some(&first.id))
            .unwrap();
        assert_eq!(second.message, "Update");
        assert_eq!(fs::read_to_string(dir.path().join("articles/a.md")).unwrap(), "two");
    }

    #[test]
    fn test_stale_version_conflicts() {
        let dir = TempDir::new().unwrap();
        let store = FsStore::new(dir.path());
        store.put("a.md", "one", "Add", None).unwrap();

        let err = store.put("a.md", "two", "Add", None).unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));
        assert_eq!(err.status(), 409);

        let err = store.put("a.md", "two", "Update", Some("stale")).unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));
        assert_eq!(fs::read_to_string(dir.path().join("a.md")).unwrap(), "one");
    }

    #[test]
    fn test_escaping_paths_rejected() {
        let dir = TempDir::new().unwrap();
        let store = FsStore::new(dir.path());
        assert!(matches!(
            store.put("../evil.md", "x", "Add", None),
            Err(StoreError::InvalidPath(_))
        ));
        assert!(matches!(store.version(""), Err(StoreError::InvalidPath(_))));
    }
}
