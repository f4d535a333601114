// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype for dotted key paths.
//!
//! This module provides the `ConfigKey` type, a newtype wrapper around `String`
//! naming a position in the configuration document, e.g. `"database.connection.host"`.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Separator between the segments of a key path.
pub const KEY_SEPARATOR: char = '.';

/// A dotted path into a configuration document.
///
/// Each segment names one mapping key at the corresponding nesting level.
///
/// # Limitations
///
/// There is no escape syntax: a mapping key that itself contains a `.` cannot be
/// addressed, because the key is always split on every dot.
///
/// # Examples
///
/// ```
/// use cfgstore::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("database.host");
/// let key2 = ConfigKey::from("database.port".to_string());
///
/// assert_eq!(key.as_str(), "database.host");
/// assert_eq!(key.segments().collect::<Vec<_>>(), vec!["database", "host"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if the key is the empty string, which never names a value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the path segments in order, outermost first.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgstore::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::from("a.b.c");
    /// let segments: Vec<&str> = key.segments().collect();
    /// assert_eq!(segments, vec!["a", "b", "c"]);
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(KEY_SEPARATOR)
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<&ConfigKey> for ConfigKey {
    fn from(key: &ConfigKey) -> Self {
        key.clone()
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for ConfigKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
