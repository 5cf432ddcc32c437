//! Configuration loading
//!
//! Each `--config` argument is a path to a JSON file, an inline JSON object
//! (detected by a leading `{`), or the literal token `ENV`, which pulls
//! settings from `MAPPER_PREFIX_STRIPPER_*` environment variables. Sources
//! are merged in argument order, later sources overriding earlier ones
//! key-by-key. The merged settings object is then validated into a
//! [`StripConfig`].

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use stripper_map::StripConfig;
use stripper_protocol::{Result, StripperError};

/// Environment variable prefix for `--config=ENV`, per the Singer convention
/// of `<PLUGIN_NAME>_<SETTING>` upper-cased.
pub const ENV_PREFIX: &str = "MAPPER_PREFIX_STRIPPER_";

/// The single setting this mapper recognizes.
pub const SETTING_STRIP_PREFIXES: &str = "strip_prefixes";

/// Load and validate configuration from the given `--config` sources.
pub fn load_config(sources: &[String]) -> Result<StripConfig> {
    let mut merged = Map::new();
    for source in sources {
        let settings = if source == "ENV" {
            settings_from_env(std::env::var(format!("{ENV_PREFIX}STRIP_PREFIXES")).ok())?
        } else if source.trim_start().starts_with('{') {
            settings_from_inline(source)?
        } else {
            settings_from_file(Path::new(source))?
        };
        // Later sources override earlier ones per key.
        for (key, value) in settings {
            merged.insert(key, value);
        }
    }
    StripConfig::from_settings(&merged)
}

fn settings_from_file(path: &Path) -> Result<Map<String, Value>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        StripperError::Config(format!("cannot read config file '{}': {e}", path.display()))
    })?;
    parse_settings_object(&contents, &format!("config file '{}'", path.display()))
}

fn settings_from_inline(source: &str) -> Result<Map<String, Value>> {
    parse_settings_object(source, "inline config")
}

fn parse_settings_object(source: &str, what: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(source)
        .map_err(|e| StripperError::Config(format!("{what} is not valid JSON: {e}")))?;
    match value {
        Value::Object(settings) => Ok(settings),
        _ => Err(StripperError::Config(format!(
            "{what} must be a JSON object"
        ))),
    }
}

/// Build settings from the `strip_prefixes` environment value, if set.
///
/// The value may be a JSON array (`["a_", "b_"]`) or a comma-separated list
/// (`a_,b_`); either form yields an array-of-strings setting.
fn settings_from_env(raw: Option<String>) -> Result<Map<String, Value>> {
    let mut settings = Map::new();
    let Some(raw) = raw else {
        return Ok(settings);
    };
    let value = if raw.trim_start().starts_with('[') {
        serde_json::from_str::<Value>(&raw).map_err(|e| {
            StripperError::Config(format!(
                "{ENV_PREFIX}STRIP_PREFIXES is not a valid JSON array: {e}"
            ))
        })?
    } else {
        Value::Array(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| Value::String(s.to_string()))
                .collect(),
        )
    };
    settings.insert(SETTING_STRIP_PREFIXES.to_string(), value);
    Ok(settings)
}
