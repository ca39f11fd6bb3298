//! Transport decorator that dumps each outgoing request.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};

use crate::dump::Dumper;
use crate::transport::{Transport, TransportError};

/// Dumps every request, then hands it to `inner` untouched.
pub struct LoggingTransport<T> {
    inner: T,
    dumper: Arc<Dumper>,
}

impl<T: Transport> LoggingTransport<T> {
    pub fn new(inner: T, dumper: Arc<Dumper>) -> Self {
        Self { inner, dumper }
    }
}

impl<T: Transport> Transport for LoggingTransport<T> {
    async fn round_trip(&self, mut req: Request<Body>) -> Result<Response<Body>, TransportError> {
        self.dumper.dump_request(&mut req).await;
        self.inner.round_trip(req).await
    }
}
