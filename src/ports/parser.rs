// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which provides an interface for
//! turning the text of a configuration file into a nested [`Mapping`].

use crate::domain::{Mapping, Result};

/// A trait for parsing configuration documents.
///
/// Implementations keep the nesting of the source format: a YAML structure like
///
/// ```yaml
/// database:
///   host: localhost
///   port: 5432
/// ```
///
/// is parsed into a root mapping with a single `database` key whose value is a
/// mapping holding `host` and `port`. The root of a document must be a mapping.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a store holding a parser can be shared
/// between threads.
///
/// # Examples
///
/// ```rust
/// use cfgstore::ports::ConfigParser;
/// use cfgstore::domain::{ConfigValue, Mapping, Result};
///
/// struct KeyValueParser;
///
/// impl ConfigParser for KeyValueParser {
///     fn parse(&self, content: &str) -> Result<Mapping> {
///         Ok(content
///             .lines()
///             .filter_map(|line| line.split_once('='))
///             .map(|(k, v)| (k.trim().to_string(), ConfigValue::from(v.trim())))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["properties"]
///     }
/// }
///
/// let document = KeyValueParser.parse("name = demo").unwrap();
/// assert_eq!(document.get("name"), Some(&ConfigValue::from("demo")));
/// ```
pub trait ConfigParser: Send + Sync {
    /// Parses configuration content into a nested mapping.
    ///
    /// # Arguments
    ///
    /// * `content` - The raw content of the configuration file
    ///
    /// # Returns
    ///
    /// * `Ok(Mapping)` - The root of the parsed document
    /// * `Err(ConfigError::ParseError)` - The content is malformed or its root is not a mapping
    fn parse(&self, content: &str) -> Result<Mapping>;

    /// Returns the file extensions supported by this parser, without the leading dot.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConfigError, ConfigValue};

    struct TestParser;

    impl ConfigParser for TestParser {
        fn parse(&self, content: &str) -> Result<Mapping> {
            if content.is_empty() {
                return Err(ConfigError::ParseError {
                    message: "empty".to_string(),
                    source: None,
                });
            }
            let mut map = Mapping::new();
            map.insert("content".to_string(), ConfigValue::from(content));
            Ok(map)
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test", "tst"]
        }
    }

    #[test]
    fn test_parser_parse() {
        let parser = TestParser;
        let result = parser.parse("dummy content").unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.get("content"), Some(&ConfigValue::from("dummy content")));
    }

    #[test]
    fn test_parser_parse_error() {
        let parser = TestParser;
        assert!(matches!(
            parser.parse(""),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_parser_supported_extensions() {
        let parser = TestParser;
        assert_eq!(parser.supported_extensions(), &["test", "tst"]);
    }

    #[test]
    fn test_parser_as_trait_object() {
        let parser: Box<dyn ConfigParser> = Box::new(TestParser);
        assert!(parser.parse("x").is_ok());
    }
}
