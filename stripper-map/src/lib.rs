//! Stripper Map - Field renaming engine
//!
//! This crate provides the transform core for the prefix stripper:
//!
//! - First-in-list-order prefix matching
//! - SCHEMA property and RECORD field renaming
//! - Per-message dispatch over the four Singer kinds
//! - The `strip_prefixes` configuration type

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod dispatch;
pub mod prefix;
pub mod rewrite;

// Re-export commonly used types
pub use stripper_protocol::{Message, Result, StripperError};

// Re-export our own types
pub use config::StripConfig;
pub use dispatch::{PrefixStripper, Produced};
pub use prefix::strip_prefix;
pub use rewrite::{rewrite_record, rewrite_schema};
