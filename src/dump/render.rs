//! Header block rendering.
//!
//! Produces the HTTP/1.x wire layout of a message head, without the body.

use axum::http::{header, HeaderMap, Request, Response};

/// A request head that cannot be rendered.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("request has neither a Host header nor an absolute URI")]
    MissingHost,
}

/// Render the head of an outgoing request.
pub fn render_request_head<B>(req: &Request<B>) -> Result<String, RenderError> {
    let host = match req.headers().get(header::HOST) {
        Some(value) => String::from_utf8_lossy(value.as_bytes()).into_owned(),
        None => req
            .uri()
            .authority()
            .map(|a| a.to_string())
            .ok_or(RenderError::MissingHost)?,
    };
    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    let mut out = format!("{} {} {:?}\nHost: {}\n", req.method(), target, req.version(), host);
    out.push_str(&format_headers(req.headers()));
    Ok(out)
}

/// Render the head of a response.
pub fn render_response_head<B>(resp: &Response<B>) -> String {
    let status = resp.status();
    format!(
        "{:?} {} {}\n{}",
        resp.version(),
        status.as_str(),
        status.canonical_reason().unwrap_or(""),
        format_headers(resp.headers())
    )
}

fn format_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .filter(|(name, _)| **name != header::HOST)
        .map(|(name, value)| format!("{}: {}\n", name, String::from_utf8_lossy(value.as_bytes())))
        .collect()
}
