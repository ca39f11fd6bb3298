//! dump-proxy: a transparent reverse proxy that logs full requests and
//! responses.
//!
//! ```text
//!   client ──▶ dump-proxy ──▶ upstream target
//!                  │
//!                  ├─ REQUEST HEADERS / REQUEST BODY   (before forwarding)
//!                  └─ RESPONSE HEADERS / RESPONSE BODY (before delivery)
//! ```

use clap::Parser;

use dump_proxy::cli::Args;
use dump_proxy::lifecycle::startup;
use dump_proxy::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return Err(e.into());
        }
    };

    logging::init(&config.observability)?;
    tracing::info!("dump-proxy v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = startup::run(config).await {
        tracing::error!(error = %e, "Fatal error");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
