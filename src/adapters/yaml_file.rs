// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML configuration parser adapter.
//!
//! This module provides the parser that turns YAML text into a configuration
//! document, and the lookup of the OS-appropriate location of a configuration file.

use crate::domain::{ConfigError, ConfigValue, Mapping, Result};
use crate::ports::ConfigParser;
use directories::ProjectDirs;
use serde::Deserialize;
use serde_yaml::Value;
use std::path::PathBuf;

/// YAML parser implementation.
///
/// This parser keeps the nesting of the YAML document: every YAML mapping becomes a
/// [`ConfigValue::Map`], every sequence a [`ConfigValue::List`].
///
/// Scalars map as follows:
///
/// - integers that fit in an `i64` become [`ConfigValue::Int`], larger ones
///   [`ConfigValue::Uint`]
/// - every other number becomes [`ConfigValue::Float`]
/// - `null`, `~` and empty values become [`ConfigValue::Null`]
/// - tags (`!name value`) are dropped and the tagged value kept
///
/// Merge keys (`<<: *anchor`) are resolved, with keys written in the mapping itself
/// taking precedence over merged ones. Only the first document of a multi-document
/// stream is read.
///
/// Mapping keys that are numbers, booleans or null are stored under their textual
/// form (`1`, `true`, `null`). Sequence or mapping keys are rejected, as are
/// two keys that render to the same text.
///
/// # Examples
///
/// ```rust
/// use cfgstore::adapters::YamlParser;
/// use cfgstore::domain::ConfigValue;
/// use cfgstore::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let yaml_content = "database:\n  host: localhost\n  port: 5432";
/// let document = parser.parse(yaml_content).unwrap();
/// let database = document.get("database").and_then(ConfigValue::as_map).unwrap();
/// assert_eq!(database.get("port"), Some(&ConfigValue::Int(5432)));
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Converts a YAML value into a configuration value.
    fn convert(value: Value) -> Result<ConfigValue> {
        Ok(match value {
            Value::Null => ConfigValue::Null,
            Value::Bool(b) => ConfigValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ConfigValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    ConfigValue::Uint(u)
                } else {
                    n.as_f64().map_or(ConfigValue::Null, ConfigValue::Float)
                }
            }
            Value::String(s) => ConfigValue::String(s),
            Value::Sequence(seq) => ConfigValue::List(
                seq.into_iter()
                    .map(Self::convert)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Value::Mapping(map) => ConfigValue::Map(Self::convert_mapping(map)?),
            Value::Tagged(tagged) => Self::convert(tagged.value)?,
        })
    }

    /// Converts a YAML mapping, rejecting keys that collide once rendered as text
    /// (`1:` and `"1":` both become `"1"`).
    fn convert_mapping(map: serde_yaml::Mapping) -> Result<Mapping> {
        let mut converted = Mapping::with_capacity(map.len());
        for (key, value) in map {
            let key = Self::convert_key(key)?;
            if converted.contains_key(&key) {
                return Err(ConfigError::ParseError {
                    message: format!("Duplicate YAML mapping key after conversion: '{}'", key),
                    source: None,
                });
            }
            let value = Self::convert(value)?;
            converted.insert(key, value);
        }
        Ok(converted)
    }

    /// Renders a YAML mapping key as a string key.
    fn convert_key(key: Value) -> Result<String> {
        match key {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Null => Ok("null".to_string()),
            Value::Tagged(tagged) => Self::convert_key(tagged.value),
            Value::Sequence(_) | Value::Mapping(_) => Err(ConfigError::ParseError {
                message: "Unsupported YAML mapping key: keys must be scalars".to_string(),
                source: None,
            }),
        }
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `true` if the content holds no YAML nodes, only blank lines and comments.
fn is_blank(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<Mapping> {
        if is_blank(content) {
            return Ok(Mapping::new());
        }

        // Only the first document of a multi-document stream is read.
        let Some(document) = serde_yaml::Deserializer::from_str(content).next() else {
            return Ok(Mapping::new());
        };
        let mut value = Value::deserialize(document).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse YAML: {}", e),
            source: Some(Box::new(e)),
        })?;
        value.apply_merge().map_err(|e| ConfigError::ParseError {
            message: format!("Failed to resolve YAML merge keys: {}", e),
            source: Some(Box::new(e)),
        })?;

        match Self::convert(value)? {
            ConfigValue::Map(map) => Ok(map),
            ConfigValue::Null => Ok(Mapping::new()),
            other => Err(ConfigError::ParseError {
                message: format!(
                    "Configuration root must be a mapping, found {}",
                    other.type_name()
                ),
                source: None,
            }),
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// Returns the path of `filename` in the OS-appropriate configuration directory.
///
/// This function uses the `directories` crate to determine the configuration
/// directory for the current operating system, e.g. `~/.config/myapp` on Linux.
///
/// # Arguments
///
/// * `app_name` - The application name (e.g., "myapp")
/// * `qualifier` - The organization/qualifier (e.g., "com.example")
/// * `filename` - The configuration file name (e.g., "config.yaml")
///
/// # Examples
///
/// ```rust,no_run
/// use cfgstore::adapters::yaml_file::default_config_path;
///
/// let path = default_config_path("myapp", "com.example", "config.yaml").unwrap();
/// println!("{}", path.display());
/// ```
pub fn default_config_path(app_name: &str, qualifier: &str, filename: &str) -> Result<PathBuf> {
    let proj_dirs =
        ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
            source_name: "yaml-file".to_string(),
            message: "Failed to determine project directories".to_string(),
            source: None,
        })?;

    Ok(proj_dirs.config_dir().join(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested<'a>(document: &'a Mapping, path: &[&str]) -> Option<&'a ConfigValue> {
        let (last, parents) = path.split_last()?;
        let mut current = document;
        for segment in parents {
            current = current.get(*segment)?.as_map()?;
        }
        current.get(*last)
    }

    #[test]
    fn test_yaml_parser_simple() {
        let parser = YamlParser::new();
        let result = parser.parse("key: value").unwrap();

        assert_eq!(result.get("key"), Some(&ConfigValue::from("value")));
    }

    #[test]
    fn test_yaml_parser_nested() {
        let parser = YamlParser::new();
        let yaml = r#"
database:
  host: localhost
  port: 5432
"#;
        let result = parser.parse(yaml).unwrap();

        assert_eq!(
            nested(&result, &["database", "host"]),
            Some(&ConfigValue::from("localhost"))
        );
        assert_eq!(
            nested(&result, &["database", "port"]),
            Some(&ConfigValue::Int(5432))
        );
    }

    #[test]
    fn test_yaml_parser_sequence() {
        let parser = YamlParser::new();
        let yaml = r#"
safeHosts:
  - admin-dev.test.com
  - x
  - y
"#;
        let result = parser.parse(yaml).unwrap();

        assert_eq!(
            result.get("safeHosts"),
            Some(&ConfigValue::List(vec![
                "admin-dev.test.com".into(),
                "x".into(),
                "y".into()
            ]))
        );
    }

    #[test]
    fn test_yaml_parser_scalar_types() {
        let parser = YamlParser::new();
        let yaml = r#"
string_value: hello
quoted_number: "42"
number_value: 42
negative: -1
float_value: 1.1e21
bool_value: true
null_value: null
empty_value:
"#;
        let result = parser.parse(yaml).unwrap();

        assert_eq!(result.get("string_value"), Some(&ConfigValue::from("hello")));
        assert_eq!(result.get("quoted_number"), Some(&ConfigValue::from("42")));
        assert_eq!(result.get("number_value"), Some(&ConfigValue::Int(42)));
        assert_eq!(result.get("negative"), Some(&ConfigValue::Int(-1)));
        assert_eq!(result.get("float_value"), Some(&ConfigValue::Float(1.1e21)));
        assert_eq!(result.get("bool_value"), Some(&ConfigValue::Bool(true)));
        assert_eq!(result.get("null_value"), Some(&ConfigValue::Null));
        assert_eq!(result.get("empty_value"), Some(&ConfigValue::Null));
    }

    #[test]
    fn test_yaml_parser_large_unsigned() {
        let parser = YamlParser::new();
        let result = parser.parse("big: 18446744073709551615").unwrap();

        assert_eq!(result.get("big"), Some(&ConfigValue::Uint(u64::MAX)));
    }

    #[test]
    fn test_yaml_parser_non_string_keys() {
        let parser = YamlParser::new();
        let result = parser.parse("1: one\ntrue: yes").unwrap();

        assert_eq!(result.get("1"), Some(&ConfigValue::from("one")));
        assert!(result.contains_key("true"));
    }

    #[test]
    fn test_yaml_parser_merge_keys() {
        let parser = YamlParser::new();
        let yaml = r#"
base: &base
  host: h
  port: 1
prod:
  <<: *base
  port: 2
"#;
        let result = parser.parse(yaml).unwrap();

        assert_eq!(nested(&result, &["prod", "host"]), Some(&ConfigValue::from("h")));
        assert_eq!(nested(&result, &["prod", "port"]), Some(&ConfigValue::Int(2)));
        assert_eq!(nested(&result, &["prod", "<<"]), None);
        assert_eq!(nested(&result, &["base", "port"]), Some(&ConfigValue::Int(1)));
    }

    #[test]
    fn test_yaml_parser_first_document_only() {
        let parser = YamlParser::new();
        let result = parser.parse("a: 1\n---\nb: 2\n").unwrap();

        assert_eq!(result.get("a"), Some(&ConfigValue::Int(1)));
        assert!(!result.contains_key("b"));
    }

    #[test]
    fn test_yaml_parser_colliding_keys_rejected() {
        let parser = YamlParser::new();
        let result = parser.parse("1: int\n\"1\": str\n");

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_yaml_parser_complex_key_rejected() {
        let parser = YamlParser::new();
        let result = parser.parse("? [a, b]\n: value");

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_yaml_parser_tagged_value() {
        let parser = YamlParser::new();
        let result = parser.parse("secret: !vault token").unwrap();

        assert_eq!(result.get("secret"), Some(&ConfigValue::from("token")));
    }

    #[test]
    fn test_yaml_parser_empty_document() {
        let parser = YamlParser::new();
        assert!(parser.parse("").unwrap().is_empty());
        assert!(parser.parse("# only a comment\n").unwrap().is_empty());
        assert!(parser.parse("---\n").unwrap().is_empty());
    }

    #[test]
    fn test_yaml_parser_scalar_root_rejected() {
        let parser = YamlParser::new();
        let result = parser.parse("just a string");

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_yaml_parser_sequence_root_rejected() {
        let parser = YamlParser::new();
        let err = parser.parse("- a\n- b").unwrap_err();

        assert!(err.to_string().contains("found list"));
    }

    #[test]
    fn test_yaml_parser_invalid() {
        let parser = YamlParser::new();
        let result = parser.parse("invalid: yaml: content:");

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_yaml_parser_supported_extensions() {
        let parser = YamlParser::default();
        let extensions = parser.supported_extensions();

        assert_eq!(extensions.len(), 2);
        assert!(extensions.contains(&"yaml"));
        assert!(extensions.contains(&"yml"));
    }

    #[test]
    fn test_default_config_path_ends_with_filename() {
        if let Ok(path) = default_config_path("cfgstore-test", "com.example", "settings.yaml") {
            assert!(path.ends_with("settings.yaml"));
        }
    }
}
