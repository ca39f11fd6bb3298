//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! dump blocks, proxy errors, lifecycle events
//!     → tracing events (inside a per-request span with request_id)
//!     → logging.rs subscriber (EnvFilter → fmt text or JSON)
//!     → stdout
//! ```

pub mod logging;
