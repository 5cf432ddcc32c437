//! Stripper I/O - Streaming pipeline loop
//!
//! This crate drives the mapper over a pair of byte streams: it reads one
//! newline-delimited message at a time, hands it to the mapper, and writes
//! every produced message back out with a per-message flush. Backpressure is
//! whatever the underlying streams provide; the loop itself never buffers
//! more than one message.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod stream;

// Re-export commonly used types
pub use stream::{run_pipeline, PipelineSummary};
pub use stripper_map::{PrefixStripper, StripConfig};
pub use stripper_protocol::{Message, Result, StripperError};
