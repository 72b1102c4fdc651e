//! Error types for configuration operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while reading, writing, validating or loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key is outside the declared allow-list.
    #[error("{key} is not allowed, use one of [{}]", .allowed.join(", "))]
    InvalidKey {
        /// The rejected key.
        key: String,
        /// The full declared allow-list.
        allowed: Vec<String>,
    },

    /// Configuration failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// File extension does not map to a known format.
    #[error("Unsupported config file format: {path:?}")]
    UnsupportedFormat {
        /// Path that was given.
        path: PathBuf,
    },

    /// File parsed, but its top level is not a key/value mapping.
    #[error("Config file {path:?} does not contain a top-level mapping")]
    NotAMapping {
        /// Path that was given.
        path: PathBuf,
    },

    /// I/O error from reading a config file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML parse error.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parse or conversion error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Validation failures reported by `assert_valid`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No store has ever been initialized for the class.
    #[error("empty configuration for {class}, call configure first")]
    EmptyConfiguration {
        /// Name of the configurable class.
        class: String,
    },

    /// One or more mandatory keys are blank.
    #[error("you are missing mandatory configuration options for {class}, please set [{}]", .keys.join(", "))]
    MissingMandatory {
        /// Name of the configurable class.
        class: String,
        /// Mandatory keys that are currently blank.
        keys: Vec<String>,
    },
}

impl ConfigError {
    /// Returns true if this is an allow-list violation.
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, ConfigError::InvalidKey { .. })
    }

    /// Returns the validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            ConfigError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_message_lists_allowed_set() {
        let err = ConfigError::InvalidKey {
            key: "not_allowed_key".to_string(),
            allowed: vec!["key".to_string(), "secret".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "not_allowed_key is not allowed, use one of [key, secret]"
        );
        assert!(err.is_invalid_key());
        assert!(err.as_validation().is_none());
    }

    #[test]
    fn test_missing_mandatory_message() {
        let err: ConfigError = ValidationError::MissingMandatory {
            class: "Mailer".to_string(),
            keys: vec!["host".to_string()],
        }
        .into();
        assert!(err.to_string().contains("[host]"));
        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::MissingMandatory { .. })
        ));
    }

    #[test]
    fn test_io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: ConfigError = io.into();
        assert_eq!(err.to_string(), "no such file");
    }
}
