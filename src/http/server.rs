//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Assemble the forwarding proxy: target, dumping transport, response hook
//! - Create the Axum Router sending every path and method to the proxy
//! - Wire up middleware (tracing)
//! - Bind the listener and serve until shutdown

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{Request, Response},
    BoxError, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::Instrument;
use url::Url;
use uuid::Uuid;

use crate::config::ProxyConfig;
use crate::dump::Dumper;
use crate::proxy::ReverseProxy;
use crate::transport::{HyperTransport, LoggingTransport};

/// The proxy as assembled by [`HttpServer`].
pub type DumpingProxy = ReverseProxy<LoggingTransport<HyperTransport>>;

/// Error type for server construction and serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Error parsing target service {target:?}: {source}")]
    InvalidTarget {
        target: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server failed: {0}")]
    Serve(#[from] std::io::Error),
}

/// HTTP server for the dump proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
    target: Url,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, ServerError> {
        let target = Url::parse(&config.upstream.target).map_err(|source| ServerError::InvalidTarget {
            target: config.upstream.target.clone(),
            source,
        })?;

        let dumper = Arc::new(Dumper::new(&config.dump));
        let transport = LoggingTransport::new(HyperTransport::new(), Arc::clone(&dumper));
        let proxy = ReverseProxy::new(target.clone(), transport).with_modify_response(move |mut resp| {
            let dumper = Arc::clone(&dumper);
            async move {
                dumper.dump_response(&mut resp).await;
                Ok::<_, BoxError>(resp)
            }
        });

        let router = Self::build_router(Arc::new(proxy));
        Ok(Self {
            router,
            config,
            target,
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(proxy: Arc<DumpingProxy>) -> Router {
        Router::new()
            .fallback(proxy_handler)
            .with_state(proxy)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    }

    /// Bind the configured listen address.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        let address = self.config.listener.socket_address();
        TcpListener::bind(&address)
            .await
            .map_err(|source| ServerError::Bind { address, source })
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            target = %self.target,
            "Starting proxy server"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Forwards any request, tagging its log lines with a fresh request id.
async fn proxy_handler(
    State(proxy): State<Arc<DumpingProxy>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
) -> Response<Body> {
    let span = tracing::info_span!(
        "proxy_request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
    );
    proxy.serve(request, addr).instrument(span).await
}
