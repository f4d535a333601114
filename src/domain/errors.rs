// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when loading a configuration
//! document or decoding parts of it. All errors use `thiserror` for proper error
//! handling and conversion.
//!
//! Lookups that simply find nothing (missing key, wrong type) are not errors; the
//! typed accessors report them as `None`.

use std::fmt;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use cfgstore::domain::errors::ConfigError;
///
/// fn get_config_value() -> Result<String, ConfigError> {
///     Err(ConfigError::ConfigKeyNotFound {
///         key: "database.host".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested configuration key was not found in the document.
    #[error("Configuration key not found: {key}")]
    ConfigKeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// The value stored under a key could not be decoded into the requested type.
    #[error("Failed to decode configuration key '{key}': {source}")]
    DecodeError {
        /// The key whose value was being decoded
        key: String,
        /// The underlying decode error
        #[source]
        source: DecodeError,
    },

    /// An error occurred while locating a configuration source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a configuration document.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Returns `true` if this error reports a missing key.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::ConfigKeyNotFound { .. })
    }
}

/// Error produced while mapping a configuration sub-tree onto a Rust type.
///
/// This is the error type of the `serde::Deserializer` implemented for
/// [`ConfigValue`](crate::domain::ConfigValue).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    message: String,
}

impl DecodeError {
    /// Creates a decode error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for DecodeError {}

impl serde::de::Error for DecodeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        DecodeError::new(msg.to_string())
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::Error as _;

    #[test]
    fn test_config_key_not_found_error() {
        let error = ConfigError::ConfigKeyNotFound {
            key: "test.key".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration key not found: test.key");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_decode_error() {
        let error = ConfigError::DecodeError {
            key: "cache.memory".to_string(),
            source: DecodeError::new("invalid type: string \"x\", expected u32"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to decode configuration key 'cache.memory': invalid type: string \"x\", expected u32"
        );
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_decode_error_custom() {
        let error = DecodeError::custom("missing field `port`");
        assert_eq!(error.message(), "missing field `port`");
    }

    #[test]
    fn test_source_error() {
        let error = ConfigError::SourceError {
            source_name: "yaml-file".to_string(),
            message: "Failed to determine project directories".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Configuration source 'yaml-file' error: Failed to determine project directories"
        );
    }

    #[test]
    fn test_parse_error() {
        let error = ConfigError::ParseError {
            message: "Invalid YAML".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration: Invalid YAML"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::from(io_error);
        match error {
            ConfigError::IoError(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
