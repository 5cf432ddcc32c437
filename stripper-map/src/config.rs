//! Mapper configuration
//!
//! One recognized setting: `strip_prefixes`, an ordered array of strings.
//! Everything else in a Singer config is tolerated and ignored, since configs
//! are routinely shared across a whole tap/mapper/target invocation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use stripper_protocol::{Result, StripperError};

/// Validated mapper configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripConfig {
    /// Prefixes to strip from field names, tried in listed order.
    /// First match wins. Empty means pass everything through unchanged.
    #[serde(default)]
    pub strip_prefixes: Vec<String>,
}

impl StripConfig {
    /// Build a configuration from a list of prefixes.
    pub fn new(strip_prefixes: Vec<String>) -> Self {
        Self { strip_prefixes }
    }

    /// Validate a raw settings object and extract the recognized settings.
    ///
    /// # Errors
    /// [`StripperError::Config`] if `strip_prefixes` is present but is not an
    /// array of strings.
    pub fn from_settings(settings: &Map<String, Value>) -> Result<Self> {
        let strip_prefixes = match settings.get("strip_prefixes") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => {
                let mut prefixes = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(prefix) => prefixes.push(prefix.clone()),
                        other => {
                            return Err(StripperError::Config(format!(
                                "'strip_prefixes' entries must be strings, got {other}"
                            )))
                        }
                    }
                }
                prefixes
            }
            Some(other) => {
                return Err(StripperError::Config(format!(
                    "'strip_prefixes' must be an array of strings, got {other}"
                )))
            }
        };
        Ok(Self { strip_prefixes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_from_settings_basic() {
        let config =
            StripConfig::from_settings(&settings(json!({"strip_prefixes": ["meta_", "sys_"]})))
                .unwrap();
        assert_eq!(config.strip_prefixes, vec!["meta_", "sys_"]);
    }

    #[test]
    fn test_from_settings_missing_means_empty() {
        let config = StripConfig::from_settings(&settings(json!({}))).unwrap();
        assert!(config.strip_prefixes.is_empty());
    }

    #[test]
    fn test_from_settings_null_means_empty() {
        let config =
            StripConfig::from_settings(&settings(json!({"strip_prefixes": null}))).unwrap();
        assert!(config.strip_prefixes.is_empty());
    }

    #[test]
    fn test_from_settings_ignores_unknown_settings() {
        let config = StripConfig::from_settings(&settings(
            json!({"strip_prefixes": ["x_"], "start_date": "2024-01-01"}),
        ))
        .unwrap();
        assert_eq!(config.strip_prefixes, vec!["x_"]);
    }

    #[test]
    fn test_from_settings_rejects_non_array() {
        let err =
            StripConfig::from_settings(&settings(json!({"strip_prefixes": "meta_"}))).unwrap_err();
        assert!(matches!(err, StripperError::Config(_)));
    }

    #[test]
    fn test_from_settings_rejects_non_string_entry() {
        let err = StripConfig::from_settings(&settings(json!({"strip_prefixes": ["meta_", 7]})))
            .unwrap_err();
        assert!(matches!(err, StripperError::Config(_)));
    }
}
