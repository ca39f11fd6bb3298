//! Content-Encoding handling for readable dumps.

use std::io::Read;

use axum::body::Bytes;
use axum::http::{header, HeaderMap};
use flate2::read::MultiGzDecoder;

/// The content coding declared on a message, as far as dumping cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEncoding {
    /// No `Content-Encoding` header, or an empty one.
    Identity,
    /// `gzip`.
    Gzip,
    /// Anything else. Passed through to the log undecoded.
    Other(String),
}

impl ContentEncoding {
    /// Read the declaration from a header map.
    ///
    /// Only the first `Content-Encoding` value is considered, matching how
    /// a single header lookup behaves. A stacked coding such as `gzip, br`
    /// is reported as `Other`.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        match headers.get(header::CONTENT_ENCODING) {
            Some(value) => Self::parse(&String::from_utf8_lossy(value.as_bytes())),
            None => Self::Identity,
        }
    }

    /// Parse a single header value. Codings are case-insensitive.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            Self::Identity
        } else if value.eq_ignore_ascii_case("gzip") {
            Self::Gzip
        } else {
            Self::Other(value.to_string())
        }
    }

    /// Best-effort decode of `raw` for display.
    ///
    /// Returns `raw` itself (a cheap clone) when no decoding applies or when
    /// the gzip stream is malformed or truncated.
    pub fn decode(&self, raw: &Bytes) -> Bytes {
        match self {
            Self::Gzip => match gunzip(raw) {
                Ok(decoded) => Bytes::from(decoded),
                Err(e) => {
                    tracing::debug!(error = %e, "gzip decode failed, logging raw body");
                    raw.clone()
                }
            },
            Self::Identity | Self::Other(_) => raw.clone(),
        }
    }
}

fn gunzip(raw: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut decoded = Vec::with_capacity(raw.len().saturating_mul(2));
    MultiGzDecoder::new(raw).read_to_end(&mut decoded)?;
    Ok(decoded)
}
