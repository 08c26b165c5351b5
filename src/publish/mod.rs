//! The publish endpoint: authenticate, validate, store an article.
//!
//! ```text
//! PublishRequest ─▶ password check (lockout aware) ─▶ 401
//!                ─▶ slug + markdown present?        ─▶ 400
//!                ─▶ store configured?                ─▶ 500
//!                ─▶ ContentStore::put(prior version) ─▶ store status
//!                ─▶ PublishResponse
//! ```
//!
//! Transport lives in `cli::serve::api`; this module is plain data in,
//! plain data out.

mod error;
mod store;

pub use error::{PublishError, StoreError};
pub use store::{Commit, ContentStore, FsStore};

use crate::auth::{AuthPolicy, AuthStore, FileStore};
use crate::config::SiteConfig;
use crate::log;
use crate::utils::hash;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishRequest {
    pub slug: String,
    pub markdown: String,
    pub title: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResponse {
    pub success: bool,
    pub message: String,
    pub url: String,
    pub commit: String,
}

/// Error body sent for any failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&PublishError> for ErrorBody {
    fn from(err: &PublishError) -> Self {
        Self { error: err.to_string() }
    }
}

pub struct PublishService {
    secret: Option<String>,
    content_path: String,
    policy: AuthPolicy,
    auth: Box<dyn AuthStore>,
    store: Option<Box<dyn ContentStore>>,
    /// Serializes load/attempt/save on the auth state.
    auth_lock: Mutex<()>,
}

impl PublishService {
    pub fn new(
        secret: Option<String>,
        content_path: impl Into<String>,
        policy: AuthPolicy,
        auth: Box<dyn AuthStore>,
        store: Option<Box<dyn ContentStore>>,
    ) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
            content_path: content_path.into(),
            policy,
            auth,
            store,
            auth_lock: Mutex::new(()),
        }
    }

    /// Service backed by the project directory: articles land in
    /// `{store_root or project root}/{content_path}`, auth state in
    /// `state_file`.
    pub fn from_config(config: &SiteConfig) -> Self {
        let publish = &config.publish;
        let store_root = publish
            .store_root
            .clone()
            .unwrap_or_else(|| config.get_root().to_path_buf());

        Self::new(
            publish.password.clone(),
            publish.content_path.clone(),
            AuthPolicy::from(publish),
            Box::new(FileStore::new(publish.state_file.clone())),
            Some(Box::new(FsStore::new(store_root))),
        )
    }

    pub fn handle(&self, request: &PublishRequest, now: u64) -> Result<PublishResponse, PublishError> {
        self.authenticate(&request.password, now)?;

        if request.slug.is_empty() || request.markdown.is_empty() {
            return Err(PublishError::MissingFields);
        }

        let store = self
            .store
            .as_deref()
            .ok_or(PublishError::ConfigurationMissing("content store"))?;

        let path = self.article_path(&request.slug);
        let prior = store.version(&path)?;

        let name = if request.title.is_empty() { &request.slug } else { &request.title };
        let message = match prior {
            Some(_) => format!("Update article: {name}"),
            None => format!("Add article: {name}"),
        };

        let commit = store.put(&path, &request.markdown, &message, prior.as_deref())?;
        log!("publish"; "{} ({})", commit.message, hash::short(&commit.id));

        Ok(PublishResponse {
            success: true,
            message: "Article published successfully".to_string(),
            url: format!("/articles/{}.html", request.slug),
            commit: commit.id,
        })
    }

    /// Store path for an article slug.
    pub fn article_path(&self, slug: &str) -> String {
        let dir = self.content_path.trim_matches('/');
        if dir.is_empty() {
            format!("{slug}.md")
        } else {
            format!("{dir}/{slug}.md")
        }
    }

    fn authenticate(&self, password: &str, now: u64) -> Result<(), PublishError> {
        let secret = self
            .secret
            .as_deref()
            .ok_or(PublishError::ConfigurationMissing("publish password"))?;

        let _guard = self.auth_lock.lock();
        let state = self.auth.load().map_err(state_error)?;
        let (state, outcome) = state.attempt(password, secret, self.policy, now);
        self.auth.save(&state).map_err(state_error)?;

        if outcome.is_granted() {
            Ok(())
        } else {
            log!("publish"; "rejected: {}", outcome.message());
            Err(PublishError::Unauthorized(outcome.message()))
        }
    }
}

fn state_error(err: anyhow::Error) -> PublishError {
    PublishError::UpstreamStoreError {
        status: 500,
        message: format!("{err:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryStore;
    use std::fs;
    use tempfile::TempDir;

    const SECRET: &str = "letmein";

    fn service(dir: &TempDir) -> PublishService {
        PublishService::new(
            Some(SECRET.into()),
            "src/content/articles",
            AuthPolicy::default(),
            Box::new(MemoryStore::new()),
            Some(Box::new(FsStore::new(dir.path()))),
        )
    }

    fn request(password: &str) -> PublishRequest {
        PublishRequest {
            slug: "hello-world".into(),
            markdown: "---\ntitle: Hello\n---\n\nBody".into(),
            title: "Hello".into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_publish_creates_article() {
        let dir = TempDir::new().unwrap();
        let response = service(&dir).handle(&request(SECRET), 1000).unwrap();

        assert!(response.success);
        assert_eq!(response.url, "/articles/hello-world.html");
        assert_eq!(response.commit, hash::content_version("---\ntitle: Hello\n---\n\nBody"));

        let written = dir.path().join("src/content/articles/hello-world.md");
        assert_eq!(fs::read_to_string(written).unwrap(), request(SECRET).markdown);
    }

    #[test]
    fn test_republish_updates() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        service.handle(&request(SECRET), 1000).unwrap();

        let update = PublishRequest { markdown: "new body".into(), ..request(SECRET) };
        let response = service.handle(&update, 1001).unwrap();
        assert_eq!(response.commit, hash::content_version("new body"));
    }

    #[test]
    fn test_wrong_password_is_unauthorized() {
        let dir = TempDir::new().unwrap();
        let err = service(&dir).handle(&request("nope"), 1000).unwrap_err();
        assert_eq!(err.status(), 401);
        assert!(err.to_string().contains("4 attempts remaining"));
        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn test_lockout_blocks_correct_password() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        for _ in 0..5 {
            assert!(service.handle(&request("nope"), 1000).is_err());
        }
        let err = service.handle(&request(SECRET), 1060).unwrap_err();
        assert_eq!(err.status(), 401);
        assert!(err.to_string().contains("14 minutes"));

        assert!(service.handle(&request(SECRET), 1000 + 900).is_ok());
    }

    #[test]
    fn test_auth_checked_before_fields() {
        let dir = TempDir::new().unwrap();
        let empty = PublishRequest { password: "nope".into(), ..Default::default() };
        assert_eq!(service(&dir).handle(&empty, 1000).unwrap_err().status(), 401);

        let empty = PublishRequest { password: SECRET.into(), ..Default::default() };
        let err = service(&dir).handle(&empty, 1000).unwrap_err();
        assert!(matches!(err, PublishError::MissingFields));
    }

    #[test]
    fn test_missing_configuration() {
        let service = PublishService::new(
            None,
            "articles",
            AuthPolicy::default(),
            Box::new(MemoryStore::new()),
            None,
        );
        let err = service.handle(&request(SECRET), 1000).unwrap_err();
        assert_eq!(err.status(), 500);

        let service = PublishService::new(
            Some(SECRET.into()),
            "articles",
            AuthPolicy::default(),
            Box::new(MemoryStore::new()),
            None,
        );
        let err = service.handle(&request(SECRET), 1000).unwrap_err();
        assert!(matches!(err, PublishError::ConfigurationMissing("content store")));
    }

    #[test]
    fn test_traversal_slug_rejected() {
        let dir = TempDir::new().unwrap();
        let bad = PublishRequest { slug: "../../etc/x".into(), ..request(SECRET) };
        let err = service(&dir).handle(&bad, 1000).unwrap_err();
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn test_article_path() {
        let dir = TempDir::new().unwrap();
        assert_eq!(service(&dir).article_path("a"), "src/content/articles/a.md");
    }

    #[test]
    fn test_request_json_defaults() {
        let request: PublishRequest = serde_json::from_str(r#"{"slug":"a"}"#).unwrap();
        assert_eq!(request.slug, "a");
        assert!(request.markdown.is_empty());
    }
}
