//! HTTP response handlers.

use crate::utils::mime::{
    self,
    types::{HTML, PLAIN},
};
use anyhow::{Context, Result, anyhow};
use std::{fs, path::Path};
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// Respond with a file from the output directory.
pub fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = mime::from_path(path);

    if is_head_request(&request) {
        return send_head(request, 200, content_type);
    }

    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    send_body(request, 200, content_type, body)
}

/// Respond with a page rendered on demand.
pub fn respond_html(request: Request, status: u16, body: String) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, status, HTML);
    }
    send_body(request, status, HTML, body.into_bytes())
}

/// Respond with the built `404.html`, or plain text if it is missing.
pub fn respond_not_found(request: Request, output: &Path) -> Result<()> {
    let not_found = output.join("404.html");

    match fs::read(&not_found) {
        Ok(body) if !is_head_request(&request) => send_body(request, 404, HTML, body),
        Ok(_) => send_head(request, 404, HTML),
        Err(_) => send_body(request, 404, PLAIN, b"404 Not Found".to_vec()),
    }
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response = Response::empty(StatusCode(status))
        .with_header(make_header("Content-Type", content_type)?);
    request.respond(response)?;
    Ok(())
}

fn send_body(request: Request, status: u16, content_type: &'static str, body: Vec<u8>) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type)?)
        .with_header(make_header("Cache-Control", "no-cache")?);
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Result<Header> {
    Header::from_bytes(key, value).map_err(|()| anyhow!("invalid header {key}: {value}"))
}
