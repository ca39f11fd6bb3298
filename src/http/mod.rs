//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum, tower-http trace layer, request span)
//!     → proxy (director, LoggingTransport dumps request, upstream)
//!     → response hook dumps response
//!     → Send to client
//! ```

pub mod server;

pub use server::{DumpingProxy, HttpServer, ServerError};
