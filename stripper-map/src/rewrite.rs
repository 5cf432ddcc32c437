//! Schema and record field renaming
//!
//! Both rewrites build a fresh order-preserving mapping, renaming keys in
//! input iteration order and never touching values. When two original names
//! strip down to the same new name, the later entry's value overwrites the
//! earlier one (the key keeps its first-inserted position); a warning is
//! logged because that overwrite silently drops data.

use serde_json::{Map, Value};
use stripper_protocol::{Result, StripperError, TYPE_RECORD, TYPE_SCHEMA};

use crate::prefix::strip_prefix;

/// Rename every key of `schema.properties` in a SCHEMA message object.
///
/// All sibling fields (`stream`, `key_properties`, the rest of `schema`, ...)
/// pass through unmodified.
///
/// # Errors
/// [`StripperError::MalformedMessage`] if `schema` or `schema.properties` is
/// missing or not an object.
pub fn rewrite_schema(
    mut message: Map<String, Value>,
    prefixes: &[String],
) -> Result<Map<String, Value>> {
    let schema = message
        .get_mut("schema")
        .and_then(Value::as_object_mut)
        .ok_or(StripperError::MalformedMessage {
            kind: TYPE_SCHEMA,
            reason: "missing 'schema' object",
        })?;
    let properties = schema
        .get_mut("properties")
        .and_then(Value::as_object_mut)
        .ok_or(StripperError::MalformedMessage {
            kind: TYPE_SCHEMA,
            reason: "missing 'schema.properties' object",
        })?;
    *properties = rename_fields(std::mem::take(properties), prefixes);
    Ok(message)
}

/// Rename every key of `record` in a RECORD message object.
///
/// Values pass through unchanged and untyped; sibling fields (`stream`,
/// `time_extracted`, `version`, ...) pass through unmodified.
///
/// # Errors
/// [`StripperError::MalformedMessage`] if `record` is missing or not an
/// object.
pub fn rewrite_record(
    mut message: Map<String, Value>,
    prefixes: &[String],
) -> Result<Map<String, Value>> {
    let record = message
        .get_mut("record")
        .and_then(Value::as_object_mut)
        .ok_or(StripperError::MalformedMessage {
            kind: TYPE_RECORD,
            reason: "missing 'record' object",
        })?;
    *record = rename_fields(std::mem::take(record), prefixes);
    Ok(message)
}

fn rename_fields(fields: Map<String, Value>, prefixes: &[String]) -> Map<String, Value> {
    let mut renamed = Map::new();
    for (name, value) in fields {
        let new_name = strip_prefix(&name, prefixes);
        if renamed.contains_key(new_name) {
            tracing::warn!(
                original = %name,
                renamed = %new_name,
                "field rename collision, later value overwrites the earlier one"
            );
        }
        renamed.insert(new_name.to_string(), value);
    }
    renamed
}
