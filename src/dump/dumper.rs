//! Request and response dumping.

use axum::body::{Body, HttpBody};
use axum::http::{Request, Response};

use crate::capture::{capture, ContentEncoding};
use crate::config::DumpConfig;
use crate::dump::render::{render_request_head, render_response_head};

pub const REQUEST_HEADERS_LABEL: &str = "----- REQUEST HEADERS -----";
pub const REQUEST_BODY_LABEL: &str = "----- REQUEST BODY -----";
pub const RESPONSE_HEADERS_LABEL: &str = "----- RESPONSE HEADERS -----";
pub const RESPONSE_BODY_LABEL: &str = "----- RESPONSE BODY -----";

/// Logs message heads and decoded bodies, leaving the messages forwardable.
#[derive(Debug, Clone, Default)]
pub struct Dumper {
    max_logged_body_bytes: Option<usize>,
}

impl Dumper {
    pub fn new(config: &DumpConfig) -> Self {
        Self {
            max_logged_body_bytes: config.max_logged_body_bytes,
        }
    }

    /// Dump an outgoing request.
    ///
    /// A request without a body gets a header block only. If the body read
    /// fails the request is left with an empty body.
    pub async fn dump_request(&self, req: &mut Request<Body>) {
        match render_request_head(&*req) {
            Ok(head) => tracing::info!("{}\n{}", REQUEST_HEADERS_LABEL, head),
            Err(e) => tracing::warn!(error = %e, "Error dumping request headers"),
        }

        if req.body().is_end_stream() {
            return;
        }

        let encoding = ContentEncoding::from_headers(req.headers());
        let body = std::mem::take(req.body_mut());
        match capture(body, &encoding).await {
            Ok(captured) => {
                tracing::info!(
                    "{}",
                    format_body_block(REQUEST_BODY_LABEL, captured.decoded(), self.max_logged_body_bytes)
                );
                *req.body_mut() = captured.restore();
            }
            Err(e) => tracing::warn!(error = %e, "Error reading request body"),
        }
    }

    /// Dump a response received from upstream.
    ///
    /// If the body read fails the response is left with an empty body.
    pub async fn dump_response(&self, resp: &mut Response<Body>) {
        tracing::info!("{}\n{}", RESPONSE_HEADERS_LABEL, render_response_head(&*resp));

        let encoding = ContentEncoding::from_headers(resp.headers());
        let body = std::mem::take(resp.body_mut());
        match capture(body, &encoding).await {
            Ok(captured) => {
                tracing::info!(
                    "{}",
                    format_body_block(RESPONSE_BODY_LABEL, captured.decoded(), self.max_logged_body_bytes)
                );
                *resp.body_mut() = captured.restore();
            }
            Err(e) => tracing::warn!(error = %e, "Error reading response body"),
        }
    }
}

/// Render a labelled body block, truncated to `limit` bytes when set.
pub fn format_body_block(label: &str, decoded: &[u8], limit: Option<usize>) -> String {
    let (shown, omitted) = match limit {
        Some(limit) if decoded.len() > limit => (&decoded[..limit], decoded.len() - limit),
        _ => (decoded, 0),
    };

    let mut block = format!("{}\n{}", label, String::from_utf8_lossy(shown));
    if omitted > 0 {
        block.push_str(&format!("\n... ({} more bytes not shown)", omitted));
    }
    block
}
