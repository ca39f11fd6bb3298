//! Startup orchestration.
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds last, after the proxy is fully assembled

use crate::config::ProxyConfig;
use crate::http::{HttpServer, ServerError};
use crate::lifecycle::{signals, Shutdown};

/// Build the proxy, bind it, and serve until a termination signal.
pub async fn run(config: ProxyConfig) -> Result<(), ServerError> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        target = %config.upstream.target,
        max_logged_body_bytes = ?config.dump.max_logged_body_bytes,
        "Configuration loaded"
    );

    let server = HttpServer::new(config)?;
    let listener = server.bind().await?;

    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    server.run(listener, signal).await
}
