//! Stripper Protocol - Core primitives for the Singer message pipeline
//!
//! This crate provides the message model and error types for the prefix
//! stripper with no I/O dependencies. It includes:
//!
//! - The four-kind Singer message enum and its wire decode/encode
//! - Kind discriminator constants
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod message;

// Re-export commonly used types
pub use error::{Result, StripperError};
pub use message::{Message, TYPE_ACTIVATE_VERSION, TYPE_RECORD, TYPE_SCHEMA, TYPE_STATE};
