//! Error types for the Singer message pipeline

use thiserror::Error;

/// Pipeline error types
#[derive(Debug, Error)]
pub enum StripperError {
    /// Configuration is missing, unreadable, or has the wrong shape.
    #[error("Invalid configuration: {0}")]
    Config(String),
    /// An input line is not a JSON object with a string `type` discriminator.
    #[error("Line {line}: {reason}")]
    Decode {
        /// 1-based input line number.
        line: u64,
        /// What was wrong with the line.
        reason: String,
    },
    /// The `type` discriminator is not one of the four recognized kinds.
    #[error("Line {line}: unsupported message type '{kind}'")]
    UnsupportedType {
        /// 1-based input line number.
        line: u64,
        /// The unrecognized discriminator value.
        kind: String,
    },
    /// A SCHEMA or RECORD message is missing its required payload mapping.
    #[error("Malformed {kind} message: {reason}")]
    MalformedMessage {
        /// Message kind tag (`SCHEMA` or `RECORD`).
        kind: &'static str,
        /// What was missing or mis-shaped.
        reason: &'static str,
    },
    /// A produced message could not be serialized back to the wire format.
    #[error("Failed to encode output message: {0}")]
    Encode(#[source] serde_json::Error),
    /// I/O operation failed while reading or writing the streams.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, StripperError>;
