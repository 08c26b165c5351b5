//! Persistence for [`AuthState`].

use super::AuthState;
use anyhow::{Context, Result};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};

pub trait AuthStore: Send + Sync {
    fn load(&self) -> Result<AuthState>;
    fn save(&self, state: &AuthState) -> Result<()>;
}

/// Keeps the state for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<AuthState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuthStore for MemoryStore {
    fn load(&self) -> Result<AuthState> {
        Ok(self.state.lock().clone())
    }

    fn save(&self, state: &AuthState) -> Result<()> {
        *self.state.lock() = state.clone();
        Ok(())
    }
}

/// JSON file, created on first save. A missing file loads as the default
/// state.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuthStore for FileStore {
    fn load(&self) -> Result<AuthState> {
        if !self.path.exists() {
            return Ok(AuthState::default());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read auth state {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid auth state in {}", self.path.display()))
    }

    fn save(&self, state: &AuthState) -> Result<()> {
        let _guard = self.write_lock.lock();
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write auth state {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), AuthState::default());
        let state = AuthState { attempts: 2, ..Default::default() };
        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), state);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join(".blogi/auth.json"));
        assert_eq!(store.load().unwrap(), AuthState::default());

        let state = AuthState {
            attempts: 1,
            lockout_until: Some(42),
            session_token: Some("abc".into()),
        };
        store.save(&state).unwrap();
        assert!(store.path().exists());
        assert_eq!(store.load().unwrap(), state);
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("auth.json");
        fs::write(&path, "not json").unwrap();
        assert!(FileStore::new(path).load().is_err());
    }
}
