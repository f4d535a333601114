// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type with exact typed access.
//!
//! This module provides the `ConfigValue` type, a tagged union over every kind of
//! value a configuration document can hold, and the `Mapping` type used for the
//! document root and every nested table.

use std::collections::HashMap;

/// A string-keyed table of configuration values.
///
/// The root of a loaded document is a `Mapping`, and so is every nested table.
pub type Mapping = HashMap<String, ConfigValue>;

/// A single value in a configuration document.
///
/// The typed accessors (`as_str`, `as_bool`, `as_i64`, ...) never coerce between
/// kinds: an integer is not a float, a boolean is not a string. Callers are expected
/// to know the shape of their configuration.
///
/// # Examples
///
/// ```
/// use cfgstore::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::from(42i64);
/// assert_eq!(value.as_i64(), Some(42));
/// assert_eq!(value.as_f64(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ConfigValue {
    /// An explicit null (`~`, `null`, or an empty value).
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer that fits in an `i64`.
    Int(i64),
    /// A non-negative integer too large for an `i64`.
    Uint(u64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
    /// A sequence of values.
    List(Vec<ConfigValue>),
    /// A nested table.
    Map(Mapping),
}

impl ConfigValue {
    /// Returns a short name for the kind of value held, used in log output.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "bool",
            ConfigValue::Int(_) => "int",
            ConfigValue::Uint(_) => "uint",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
            ConfigValue::List(_) => "list",
            ConfigValue::Map(_) => "map",
        }
    }

    /// Returns `true` for [`ConfigValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Returns the string if this is a [`ConfigValue::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean if this is a [`ConfigValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`ConfigValue::Int`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the integer as a `u64` if this is a non-negative integer.
    ///
    /// Both [`ConfigValue::Uint`] and non-negative [`ConfigValue::Int`] qualify;
    /// floats never do.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgstore::domain::config_value::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::Int(60).as_u64(), Some(60));
    /// assert_eq!(ConfigValue::Int(-1).as_u64(), None);
    /// assert_eq!(ConfigValue::Uint(u64::MAX).as_u64(), Some(u64::MAX));
    /// ```
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            ConfigValue::Uint(u) => Some(*u),
            ConfigValue::Int(i) => u64::try_from(*i).ok(),
            _ => None,
        }
    }

    /// Returns the number if this is a [`ConfigValue::Float`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the elements if this is a [`ConfigValue::List`].
    pub fn as_list(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the table if this is a [`ConfigValue::Map`].
    pub fn as_map(&self) -> Option<&Mapping> {
        match self {
            ConfigValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the elements as strings if this is a list made only of strings.
    ///
    /// A single non-string element makes the whole call return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgstore::domain::config_value::ConfigValue;
    ///
    /// let hosts = ConfigValue::List(vec!["a".into(), "b".into()]);
    /// assert_eq!(hosts.as_string_list(), Some(vec!["a".to_string(), "b".to_string()]));
    ///
    /// let mixed = ConfigValue::List(vec!["a".into(), 1i64.into()]);
    /// assert_eq!(mixed.as_string_list(), None);
    /// ```
    pub fn as_string_list(&self) -> Option<Vec<String>> {
        self.as_list()?
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect()
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Int(i)
    }
}

impl From<u64> for ConfigValue {
    fn from(u: u64) -> Self {
        match i64::try_from(u) {
            Ok(i) => ConfigValue::Int(i),
            Err(_) => ConfigValue::Uint(u),
        }
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Float(f)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(items: Vec<ConfigValue>) -> Self {
        ConfigValue::List(items)
    }
}

impl From<Mapping> for ConfigValue {
    fn from(map: Mapping) -> Self {
        ConfigValue::Map(map)
    }
}
