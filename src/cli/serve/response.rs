//! HTTP response handlers.

use crate::{
    debug,
    embed::serve::{NOT_FOUND_HTML, NotFoundVars},
    logger::colorize_status,
    utils::mime::{self, types},
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, io::Read, path::Path};
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// CORS headers sent with every API response.
pub const CORS_HEADERS: &[(&str, &str)] = &[
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// Respond with a static file.
pub fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = mime::from_path(path);

    if is_head_request(&request) {
        return send_head(request, 200, content_type);
    }

    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    send_body(request, 200, content_type, body)
}

/// Respond with 404 page (the site's own `404.html` when present).
pub fn respond_not_found(request: Request, serve_root: &Path) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 404, types::HTML);
    }

    let custom = serve_root.join("404.html");
    if let Ok(body) = fs::read(&custom) {
        return send_body(request, 404, types::HTML, body);
    }

    let body = NOT_FOUND_HTML.render(&NotFoundVars {
        path: request.url().to_string(),
    });
    send_body(request, 404, types::HTML, body.into_bytes())
}

pub fn respond_method_not_allowed(request: Request) -> Result<()> {
    send_body(request, 405, types::PLAIN, b"405 Method Not Allowed".to_vec())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(request, 503, types::PLAIN, b"503 Service Unavailable".to_vec())
}

/// JSON body with CORS headers.
pub fn respond_json<T: Serialize>(request: Request, status: u16, value: &T) -> Result<()> {
    let body = serde_json::to_vec(value)?;
    let response = with_cors(Response::from_data(body))
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", types::JSON));
    send(request, response)
}

/// Empty body with CORS headers (preflight).
pub fn respond_preflight(request: Request) -> Result<()> {
    let response = with_cors(Response::empty(StatusCode(200)));
    send(request, response)
}

pub fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn with_cors<R: Read>(mut response: Response<R>) -> Response<R> {
    for &(key, value) in CORS_HEADERS {
        response.add_header(make_header(key, value));
    }
    response
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response =
        Response::empty(StatusCode(status)).with_header(make_header("Content-Type", content_type));
    send(request, response)
}

fn send_body(request: Request, status: u16, content_type: &'static str, body: Vec<u8>) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type));
    send(request, response)
}

fn send<R: Read>(request: Request, response: Response<R>) -> Result<()> {
    debug!(
        "serve";
        "{} {} {}",
        request.method(),
        request.url(),
        colorize_status(response.status_code().0)
    );
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).unwrap()
}
