//! Read-once body materialisation.

use axum::body::{Body, Bytes, HttpBody};
use axum::BoxError;
use http_body_util::BodyExt;

use crate::capture::ContentEncoding;

/// Failed to read a message body to completion.
///
/// The source body has been consumed (and dropped) by the time this is
/// returned, so nothing is left to restore.
#[derive(Debug, thiserror::Error)]
#[error("failed to read body: {0}")]
pub struct CaptureError(#[source] BoxError);

/// A fully read message body.
#[derive(Debug, Clone)]
pub struct CapturedBody {
    raw: Bytes,
    decoded: Bytes,
}

impl CapturedBody {
    /// Bytes exactly as read off the wire.
    pub fn raw(&self) -> &Bytes {
        &self.raw
    }

    /// Bytes for display. Equal to `raw()` unless gzip decoding succeeded.
    pub fn decoded(&self) -> &Bytes {
        &self.decoded
    }

    /// A fresh body replaying the raw bytes from the start.
    ///
    /// Every call yields an independent body.
    pub fn restore(&self) -> Body {
        Body::from(self.raw.clone())
    }
}

/// Read `body` to the end, then decode according to `encoding`.
///
/// The body is consumed and dropped whether or not the read succeeds.
pub async fn capture<B>(body: B, encoding: &ContentEncoding) -> Result<CapturedBody, CaptureError>
where
    B: HttpBody<Data = Bytes>,
    B::Error: Into<BoxError>,
{
    let raw = body
        .collect()
        .await
        .map_err(|e| CaptureError(e.into()))?
        .to_bytes();
    let decoded = encoding.decode(&raw);

    Ok(CapturedBody { raw, decoded })
}
