//! Development server.
//!
//! Serves the built output directory. A writings list requested with a
//! query string (`/writings/poems/?q=road&tag=hope`) is rendered on demand
//! with that filter already applied; the built pages apply it in the
//! browser instead.

mod lifecycle;
mod path;
mod response;

use crate::{
    config::{ServeConfig, SiteConfig},
    content::{Catalog, FilterCriteria},
    core::{PreferenceStore, is_shutdown, register_server},
    image::ImageResolver,
    log,
    page::Route,
    render::{RenderContext, render_page_filtered},
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Shared by every request worker.
struct ServeState {
    config: Arc<SiteConfig>,
    catalog: Catalog,
    images: ImageResolver,
}

impl ServeState {
    /// Render `route` the way the build does, with fault details shown.
    fn render(&self, route: &Route, query: &str) -> String {
        let ctx = RenderContext {
            config: &self.config,
            catalog: &self.catalog,
            images: &self.images,
            theme: PreferenceStore::new(&self.config.state_dir()).read_theme(),
            show_error_detail: true,
        };
        render_page_filtered(&ctx, route, &FilterCriteria::from_query(query)).html
    }
}

/// Serve the output directory until Ctrl+C.
pub fn serve_site(config: Arc<SiteConfig>) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    register_server(Arc::clone(&server));

    let url = ServeConfig {
        interface: addr.ip(),
        port: addr.port(),
    }
    .base_url();
    log!("serve"; "{}", url);

    let state = Arc::new(ServeState {
        catalog: Catalog::load()?,
        images: ImageResolver::from_config(&config),
        config,
    });
    run_request_loop(&server, &state)
}

fn run_request_loop(server: &Server, state: &Arc<ServeState>) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .context("failed to create request thread pool")?;

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
    if is_shutdown() {
        return response::respond_unavailable(request);
    }

    let url = request.url().to_string();
    if let Some((path, query)) = url.split_once('?')
        && let route @ Route::Writings(_) = Route::parse(path)
    {
        let body = state.render(&route, query);
        return response::respond_html(request, 200, body);
    }

    if let Some(file) = path::resolve_path(&url, &state.config.build.output) {
        return response::respond_file(request, &file);
    }

    response::respond_not_found(request, &state.config.build.output)
}
