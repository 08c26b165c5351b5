//! Local server: static files from the output directory plus the publish
//! endpoint the editor posts to.

mod api;
mod lifecycle;
mod path;
mod response;

pub use lifecycle::setup_shutdown_handler;

use crate::{config::SiteConfig, log, publish::PublishService};
use anyhow::{Context, Result};
use std::sync::Arc;
use tiny_http::{Method, Request, Server};

/// Worker threads answering requests.
const WORKERS: usize = 4;

/// Shared by every request handler.
struct ServeState {
    config: SiteConfig,
    publisher: PublishService,
}

/// Bind and serve until Ctrl+C.
pub fn serve_site(config: &SiteConfig) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server(Arc::clone(&server));

    if config.publish.password.is_none() {
        log!("serve"; "publish password not set, {} will refuse requests", api::PUBLISH_PATH);
    }
    log!("serve"; "http://{}", addr);

    let state = Arc::new(ServeState {
        config: config.clone(),
        publisher: PublishService::from_config(config),
    });
    run_request_loop(&server, &state)
}

fn run_request_loop(server: &Server, state: &Arc<ServeState>) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(WORKERS)
        .build()
        .context("failed to create thread pool")?;

    for request in server.incoming_requests() {
        let state = Arc::clone(state);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &state) {
                log!("serve"; "request error: {e}");
            }
        });
    }
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, state: &ServeState) -> Result<()> {
    if lifecycle::is_shutdown() {
        return response::respond_unavailable(request);
    }

    if api::is_api_request(request.url()) {
        return api::handle_publish(request, &state.publisher);
    }

    if !matches!(request.method(), Method::Get | Method::Head) {
        return response::respond_method_not_allowed(request);
    }

    let output = &state.config.build.output;
    match path::resolve_path(request.url(), output) {
        Some(file) => response::respond_file(request, &file),
        None => response::respond_not_found(request, output),
    }
}
