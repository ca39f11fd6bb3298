//! Single-host forwarding engine.
//!
//! # Data Flow
//! ```text
//! inbound Request
//!     → director.rs (rewrite URI onto the target, join paths and queries)
//!     → headers.rs (strip hop-by-hop, append X-Forwarded-For)
//!     → Transport::round_trip
//!     → headers.rs (strip hop-by-hop from the response)
//!     → response hook (may replace the response)
//!     → outbound Response, or 502 on any failure
//! ```

pub mod director;
pub mod engine;
pub mod headers;

pub use engine::{ResponseHook, ReverseProxy};
