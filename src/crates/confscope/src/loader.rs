//! Config file loading.
//!
//! Reads a file into a raw key/value mapping. The format is picked from the
//! file extension:
//! - `.yaml` / `.yml` parsed with `serde_yaml`
//! - `.json` parsed with `serde_json`
//!
//! The top level must be a mapping. Its keys become configuration keys and
//! its values become configuration values; nested structure is kept as-is.
//!
//! # Example
//!
//! ```rust,ignore
//! use confscope::loader::load_raw_config;
//!
//! let raw = load_raw_config("config/mailer.yml")?;
//! let host = raw.get("host");
//! ```

use crate::error::{ConfigError, ConfigResult};
use serde_json::{Map, Value};
use serde_yaml::Value as YamlValue;
use std::path::Path;
use tracing::debug;

/// Raw key/value data read from a config file.
pub type RawConfig = Map<String, Value>;

/// Load a YAML file into a raw mapping.
///
/// An empty document yields an empty mapping.
pub fn load_yaml(path: impl AsRef<Path>) -> ConfigResult<RawConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let yaml: YamlValue = serde_yaml::from_str(&content)?;

    let mapping = match yaml {
        YamlValue::Null => return Ok(RawConfig::new()),
        YamlValue::Mapping(mapping) => mapping,
        _ => {
            return Err(ConfigError::NotAMapping {
                path: path.to_path_buf(),
            })
        }
    };

    let mut raw = RawConfig::new();
    for (key, value) in mapping {
        let key = yaml_key(&key).ok_or_else(|| ConfigError::NotAMapping {
            path: path.to_path_buf(),
        })?;
        raw.insert(key, serde_json::to_value(&value)?);
    }
    Ok(raw)
}

/// Load a JSON file into a raw mapping.
pub fn load_json(path: impl AsRef<Path>) -> ConfigResult<RawConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let value: Value = serde_json::from_str(&content)?;
    match value {
        Value::Object(raw) => Ok(raw),
        _ => Err(ConfigError::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}

/// Load a config file, picking the format from its extension (case-insensitive).
pub fn load_raw_config(path: impl AsRef<Path>) -> ConfigResult<RawConfig> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

    debug!("Loading config file {:?}", path);

    match extension.as_str() {
        "yaml" | "yml" => load_yaml(path),
        "json" => load_json(path),
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

// Scalar keys only; `1: x` and `true: y` are kept as "1" and "true".
fn yaml_key(key: &YamlValue) -> Option<String> {
    match key {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
