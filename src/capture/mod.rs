//! Body capture and restore.
//!
//! # Data Flow
//! ```text
//! message body (single-read stream)
//!     → body.rs (read to end once → raw bytes)
//!     → encoding.rs (gzip? → decoded bytes, falls back to raw)
//!     → CapturedBody
//!         ├─ decoded() → dump log block
//!         └─ restore() → fresh Body put back on the message
//! ```
//!
//! # Design Decisions
//! - The stream is materialised into one `Bytes` buffer; restores are cheap
//!   reference-counted views over it, never a tee of the original stream
//! - Decoding never fails the capture; only the initial read can
//! - Raw bytes are never altered, decoded bytes are never forwarded

pub mod body;
pub mod encoding;

pub use body::{capture, CaptureError, CapturedBody};
pub use encoding::ContentEncoding;
