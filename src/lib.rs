//! Transparent diagnostic reverse proxy library.
//!
//! Forwards all traffic to one upstream and logs each request and response,
//! headers and gzip-decoded body, without altering what is forwarded.

// Core
pub mod capture;
pub mod dump;
pub mod proxy;
pub mod transport;

// Serving
pub mod cli;
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::schema::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
