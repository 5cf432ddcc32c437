//! Message dispatch
//!
//! A single-step classifier over the four message kinds. SCHEMA and RECORD
//! are rewritten; STATE and ACTIVATE_VERSION pass through untouched. Each
//! dispatch yields an ordered sequence of produced messages so filtering or
//! fan-out are representable later; the current policy always yields exactly
//! one.

use smallvec::{smallvec, SmallVec};
use stripper_protocol::{Message, Result};

use crate::config::StripConfig;
use crate::rewrite::{rewrite_record, rewrite_schema};

/// Messages produced for one input message. Inline capacity of one keeps the
/// common case allocation-free and single-message-in-flight.
pub type Produced = SmallVec<[Message; 1]>;

/// The mapper: holds the immutable prefix configuration and transforms one
/// message at a time. No state is carried across calls.
#[derive(Debug, Clone)]
pub struct PrefixStripper {
    config: StripConfig,
}

impl PrefixStripper {
    /// Create a mapper from a validated configuration.
    pub fn new(config: StripConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Transform one message into zero or more output messages.
    ///
    /// # Errors
    /// [`StripperError::MalformedMessage`](stripper_protocol::StripperError::MalformedMessage)
    /// if a SCHEMA or RECORD message is missing its payload mapping.
    pub fn map_message(&self, message: Message) -> Result<Produced> {
        let prefixes = &self.config.strip_prefixes;
        // Exhaustive on purpose: a new message kind must pick a branch here.
        let produced = match message {
            Message::Schema(object) => Message::Schema(rewrite_schema(object, prefixes)?),
            Message::Record(object) => Message::Record(rewrite_record(object, prefixes)?),
            Message::State(object) => Message::State(object),
            Message::ActivateVersion(object) => Message::ActivateVersion(object),
        };
        Ok(smallvec![produced])
    }
}
