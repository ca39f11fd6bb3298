//! Diagnostic dumping of proxied messages.
//!
//! # Data Flow
//! ```text
//! Request (before send) / Response (before delivery)
//!     → render.rs (status line + headers as text)  → log block
//!     → capture (read body once, decode)           → log block
//!     → restored body put back on the message
//! ```
//!
//! # Design Decisions
//! - Every failure is logged and swallowed; dumping never changes what is
//!   forwarded except when the body read itself fails
//! - One tracing event per block so blocks from concurrent requests never
//!   interleave mid-block

pub mod dumper;
pub mod render;

pub use dumper::Dumper;
pub use render::{render_request_head, render_response_head, RenderError};
