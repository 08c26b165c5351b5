//! `[publish]` section configuration.
//!
//! ```toml
//! [publish]
//! password = "..."                      # or BLOGI_PUBLISH_PASSWORD
//! store_root = "."                      # content store root directory
//! content_path = "src/content/articles" # article directory inside the store
//! max_attempts = 5                      # failed logins before lockout
//! lockout_minutes = 15
//! state_file = ".blogi/auth.json"       # persisted attempt counter
//! ```
//!
//! The publish endpoint refuses every request when either `password` or
//! `store_root` is unset.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable consulted when `password` is not in the config file.
pub const PASSWORD_ENV: &str = "BLOGI_PUBLISH_PASSWORD";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    pub password: Option<String>,
    pub store_root: Option<PathBuf>,
    pub content_path: String,
    pub max_attempts: u32,
    pub lockout_minutes: u64,
    pub state_file: PathBuf,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            password: None,
            store_root: None,
            content_path: "src/content/articles".into(),
            max_attempts: 5,
            lockout_minutes: 15,
            state_file: ".blogi/auth.json".into(),
        }
    }
}

impl PublishConfig {
    pub const MAX_ATTEMPTS: FieldPath = FieldPath::new("publish.max_attempts");
    pub const PASSWORD: FieldPath = FieldPath::new("publish.password");

    /// Fill `password` from the environment when the file leaves it unset.
    pub fn apply_env(&mut self) {
        if self.password.is_none() {
            self.password = std::env::var(PASSWORD_ENV).ok().filter(|p| !p.is_empty());
        }
    }

    /// Lockout duration in seconds.
    pub const fn lockout_secs(&self) -> u64 {
        self.lockout_minutes.saturating_mul(60)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.max_attempts == 0 {
            diag.error(Self::MAX_ATTEMPTS, "must be greater than 0");
        }
        if self.password.as_deref().is_some_and(|p| p.trim().is_empty()) {
            diag.warn(Self::PASSWORD, "empty password disables publishing");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.publish.password.is_none());
        assert!(config.publish.store_root.is_none());
        assert_eq!(config.publish.content_path, "src/content/articles");
        assert_eq!(config.publish.max_attempts, 5);
        assert_eq!(config.publish.lockout_secs(), 15 * 60);
    }

    #[test]
    fn test_custom() {
        let config = test_parse_config(
            "[publish]\npassword = \"hunter2\"\nstore_root = \"store\"\nmax_attempts = 3\nlockout_minutes = 1",
        );
        assert_eq!(config.publish.password.as_deref(), Some("hunter2"));
        assert_eq!(config.publish.store_root, Some(PathBuf::from("store")));
        assert_eq!(config.publish.max_attempts, 3);
        assert_eq!(config.publish.lockout_secs(), 60);
    }

    #[test]
    fn test_huge_lockout_saturates() {
        let publish = PublishConfig { lockout_minutes: u64::MAX, ..Default::default() };
        assert_eq!(publish.lockout_secs(), u64::MAX);
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = test_parse_config("[publish]\nmax_attempts = 0");
        let mut diag = ConfigDiagnostics::new();
        config.publish.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_file_password_wins_over_env() {
        let mut publish = PublishConfig {
            password: Some("from-file".into()),
            ..Default::default()
        };
        publish.apply_env();
        assert_eq!(publish.password.as_deref(), Some("from-file"));
    }
}
