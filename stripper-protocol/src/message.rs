//! Singer message model
//!
//! A Singer stream is newline-delimited JSON: each line is one object with a
//! `type` discriminator. The four recognized kinds are SCHEMA, RECORD, STATE,
//! and ACTIVATE_VERSION. Each variant keeps the complete decoded object
//! (including its `type` key) so pass-through kinds re-encode with every
//! field intact and in its original position.

use serde_json::{Map, Value};

use crate::error::{Result, StripperError};

/// Discriminator value for schema messages.
pub const TYPE_SCHEMA: &str = "SCHEMA";
/// Discriminator value for record messages.
pub const TYPE_RECORD: &str = "RECORD";
/// Discriminator value for state messages.
pub const TYPE_STATE: &str = "STATE";
/// Discriminator value for activate-version messages.
pub const TYPE_ACTIVATE_VERSION: &str = "ACTIVATE_VERSION";

/// One decoded Singer message.
///
/// Variants hold the raw message object; payload values are opaque to this
/// crate. Adding a new kind here forces every `match` downstream to decide
/// how to handle it.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// SCHEMA message: declares the shape of a stream (`schema.properties`).
    Schema(Map<String, Value>),
    /// RECORD message: one row of data (`record`).
    Record(Map<String, Value>),
    /// STATE message: pipeline checkpoint, opaque.
    State(Map<String, Value>),
    /// ACTIVATE_VERSION message: stream version marker, opaque.
    ActivateVersion(Map<String, Value>),
}

impl Message {
    /// Decode one wire line into a message.
    ///
    /// `line_no` is the 1-based input line number, used only for diagnostics.
    ///
    /// # Errors
    /// - [`StripperError::Decode`] if the line is not a JSON object or has no
    ///   string `type` field.
    /// - [`StripperError::UnsupportedType`] if `type` is not one of the four
    ///   recognized kinds.
    pub fn from_line(line: &str, line_no: u64) -> Result<Self> {
        let value: Value = serde_json::from_str(line).map_err(|e| StripperError::Decode {
            line: line_no,
            reason: format!("invalid JSON: {e}"),
        })?;
        let Value::Object(object) = value else {
            return Err(StripperError::Decode {
                line: line_no,
                reason: "message is not a JSON object".to_string(),
            });
        };
        let kind = match object.get("type") {
            Some(Value::String(kind)) => kind.as_str(),
            Some(_) => {
                return Err(StripperError::Decode {
                    line: line_no,
                    reason: "'type' field is not a string".to_string(),
                })
            }
            None => {
                return Err(StripperError::Decode {
                    line: line_no,
                    reason: "missing 'type' field".to_string(),
                })
            }
        };
        match kind {
            TYPE_SCHEMA => Ok(Message::Schema(object)),
            TYPE_RECORD => Ok(Message::Record(object)),
            TYPE_STATE => Ok(Message::State(object)),
            TYPE_ACTIVATE_VERSION => Ok(Message::ActivateVersion(object)),
            other => Err(StripperError::UnsupportedType {
                line: line_no,
                kind: other.to_string(),
            }),
        }
    }

    /// Encode this message as one wire line (no trailing newline).
    ///
    /// # Errors
    /// [`StripperError::Encode`] if serialization fails.
    pub fn into_line(self) -> Result<String> {
        serde_json::to_string(&Value::Object(self.into_object())).map_err(StripperError::Encode)
    }

    /// The message's kind tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Message::Schema(_) => TYPE_SCHEMA,
            Message::Record(_) => TYPE_RECORD,
            Message::State(_) => TYPE_STATE,
            Message::ActivateVersion(_) => TYPE_ACTIVATE_VERSION,
        }
    }

    /// Borrow the underlying message object.
    pub fn object(&self) -> &Map<String, Value> {
        match self {
            Message::Schema(m)
            | Message::Record(m)
            | Message::State(m)
            | Message::ActivateVersion(m) => m,
        }
    }

    /// Consume the message, yielding the underlying object.
    pub fn into_object(self) -> Map<String, Value> {
        match self {
            Message::Schema(m)
            | Message::Record(m)
            | Message::State(m)
            | Message::ActivateVersion(m) => m,
        }
    }
}
