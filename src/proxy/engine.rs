//! The reverse proxy itself.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode, Version};
use axum::BoxError;
use futures_util::future::BoxFuture;
use url::Url;

use crate::proxy::director::rewrite_uri;
use crate::proxy::headers::{append_forwarded_for, remove_hop_by_hop};
use crate::transport::Transport;

/// Async inspection or replacement of an upstream response before delivery.
///
/// An error turns the exchange into a 502.
pub type ResponseHook =
    Arc<dyn Fn(Response<Body>) -> BoxFuture<'static, Result<Response<Body>, BoxError>> + Send + Sync>;

/// Forwards every request to one upstream through a [`Transport`].
pub struct ReverseProxy<T> {
    target: Url,
    transport: T,
    modify_response: Option<ResponseHook>,
}

impl<T: Transport> ReverseProxy<T> {
    pub fn new(target: Url, transport: T) -> Self {
        Self {
            target,
            transport,
            modify_response: None,
        }
    }

    /// Install a hook run on each upstream response.
    pub fn with_modify_response<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(Response<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Body>, BoxError>> + Send + 'static,
    {
        self.modify_response = Some(Arc::new(move |resp| Box::pin(hook(resp))));
        self
    }

    /// Forward `request` from `client` and produce the response to send back.
    pub async fn serve(&self, request: Request<Body>, client: SocketAddr) -> Response<Body> {
        let (mut parts, body) = request.into_parts();

        parts.uri = match rewrite_uri(&self.target, &parts.uri) {
            Ok(uri) => uri,
            Err(e) => {
                tracing::error!(error = %e, uri = %parts.uri, "http: proxy error: cannot rewrite URI");
                return bad_gateway();
            }
        };
        parts.version = Version::HTTP_11;
        remove_hop_by_hop(&mut parts.headers);
        append_forwarded_for(&mut parts.headers, client.ip());

        let mut response = match self.transport.round_trip(Request::from_parts(parts, body)).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "http: proxy error");
                return bad_gateway();
            }
        };
        remove_hop_by_hop(response.headers_mut());

        match &self.modify_response {
            Some(hook) => match hook(response).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::error!(error = %e, "http: proxy error: response hook failed");
                    bad_gateway()
                }
            },
            None => response,
        }
    }
}

fn bad_gateway() -> Response<Body> {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::BAD_GATEWAY;
    response
}
