//! Request sending.
//!
//! # Data Flow
//! ```text
//! ReverseProxy (director already applied)
//!     → logging.rs  LoggingTransport: dump request, then delegate
//!     → client.rs   HyperTransport: hyper-util pooled HTTP/1.1 client
//!     → upstream
//! ```
//!
//! # Design Decisions
//! - One trait, one operation; decorators wrap an inner `Transport`
//! - Transport errors pass through unchanged; dumping adds none

pub mod client;
pub mod logging;

use std::future::Future;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::BoxError;

pub use client::HyperTransport;
pub use logging::LoggingTransport;

/// Failure to obtain a response from the upstream.
#[derive(Debug, thiserror::Error)]
#[error("upstream request failed: {0}")]
pub struct TransportError(#[source] pub BoxError);

/// Sends one request and returns the upstream's response.
pub trait Transport: Send + Sync + 'static {
    fn round_trip(
        &self,
        req: Request<Body>,
    ) -> impl Future<Output = Result<Response<Body>, TransportError>> + Send;
}
