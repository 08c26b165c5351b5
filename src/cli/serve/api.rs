//! `/api/publish`: the editor's JSON endpoint.

use super::response::{respond_json, respond_preflight};
use crate::{
    auth::now_secs,
    log,
    publish::{ErrorBody, PublishError, PublishRequest, PublishService},
};
use anyhow::Result;
use std::io::Read;
use tiny_http::{Method, Request};

pub const PUBLISH_PATH: &str = "/api/publish";

/// Request bodies above this size are rejected.
const MAX_BODY: u64 = 5 * 1024 * 1024;

/// Outcome of one API call, before it is written to the wire.
#[derive(Debug)]
pub enum ApiReply {
    Preflight,
    Json { status: u16, body: serde_json::Value },
}

impl ApiReply {
    fn error(status: u16, message: impl Into<String>) -> Self {
        let body = ErrorBody { error: message.into() };
        Self::Json {
            status,
            body: serde_json::to_value(body).unwrap_or_default(),
        }
    }
}

pub fn is_api_request(url: &str) -> bool {
    let path = url.split('?').next().unwrap_or(url);
    path.trim_end_matches('/') == PUBLISH_PATH
}

pub fn handle_publish(mut request: Request, service: &PublishService) -> Result<()> {
    let mut body = String::new();
    let read = request
        .as_reader()
        .take(MAX_BODY + 1)
        .read_to_string(&mut body);

    let reply = match read {
        Ok(_) => dispatch(request.method(), &body, service, now_secs()),
        Err(e) => ApiReply::error(400, format!("Invalid request body: {e}")),
    };

    match reply {
        ApiReply::Preflight => respond_preflight(request),
        ApiReply::Json { status, body } => respond_json(request, status, &body),
    }
}

/// Route a request by method and decode its body.
pub fn dispatch(method: &Method, body: &str, service: &PublishService, now: u64) -> ApiReply {
    match method {
        Method::Options => return ApiReply::Preflight,
        Method::Post => {}
        _ => return ApiReply::error(405, "Method not allowed"),
    }

    if body.len() as u64 > MAX_BODY {
        return ApiReply::error(413, "Request body too large");
    }

    let request: PublishRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(e) => return ApiReply::error(400, format!("Invalid JSON: {e}")),
    };

    match service.handle(&request, now) {
        Ok(response) => ApiReply::Json {
            status: 200,
            body: serde_json::to_value(response).unwrap_or_default(),
        },
        Err(err) => {
            if !matches!(err, PublishError::Unauthorized(_)) {
                log!("publish"; "failed: {err}");
            }
            ApiReply::error(err.status(), err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthPolicy, MemoryStore};
    use crate::publish::FsStore;
    use serde_json::json;
    use tempfile::TempDir;

    fn service(dir: &TempDir) -> PublishService {
        PublishService::new(
            Some("pw".into()),
            "articles",
            AuthPolicy::default(),
            Box::new(MemoryStore::new()),
            Some(Box::new(FsStore::new(dir.path()))),
        )
    }

    fn status(reply: &ApiReply) -> u16 {
        match reply {
            ApiReply::Preflight => 200,
            ApiReply::Json { status, .. } => *status,
        }
    }

    #[test]
    fn test_is_api_request() {
        assert!(is_api_request("/api/publish"));
        assert!(is_api_request("/api/publish/?x=1"));
        assert!(!is_api_request("/api/publishing"));
    }

    #[test]
    fn test_methods() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        assert!(matches!(dispatch(&Method::Options, "", &service, 0), ApiReply::Preflight));

        let reply = dispatch(&Method::Get, "", &service, 0);
        assert_eq!(status(&reply), 405);
        let ApiReply::Json { body, .. } = reply else { unreachable!() };
        assert_eq!(body, json!({ "error": "Method not allowed" }));
    }

    #[test]
    fn test_invalid_json() {
        let dir = TempDir::new().unwrap();
        assert_eq!(status(&dispatch(&Method::Post, "{not json", &service(&dir), 0)), 400);
    }

    #[test]
    fn test_publish_round() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let body = json!({
            "slug": "hello",
            "markdown": "---\ntitle: Hello\n---\n\nHi",
            "title": "Hello",
            "password": "pw",
        })
        .to_string();

        let ApiReply::Json { status, body } = dispatch(&Method::Post, &body, &service, 0) else {
            panic!("expected json reply");
        };
        assert_eq!(status, 200);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["url"], json!("/articles/hello.html"));
        assert!(dir.path().join("articles/hello.md").is_file());
    }

    #[test]
    fn test_wrong_password() {
        let dir = TempDir::new().unwrap();
        let body = json!({ "slug": "a", "markdown": "x", "password": "bad" }).to_string();
        let reply = dispatch(&Method::Post, &body, &service(&dir), 0);
        assert_eq!(status(&reply), 401);
    }
}
