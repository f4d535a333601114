// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration service trait definition.
//!
//! This module defines the `ConfigurationService` trait, the main interface for
//! reading a loaded configuration document: raw and typed lookup by dotted key,
//! structural decoding, and access to the whole document.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Mapping, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// The main configuration service trait.
///
/// Implementors provide loading, raw lookup and whole-document access; the typed
/// accessors and [`unmarshal_key`](ConfigurationService::unmarshal_key) are built on
/// top of [`get`](ConfigurationService::get).
///
/// # Typed accessors
///
/// Every `get_*` accessor returns `None` both when the key is absent and when the
/// stored value is of another type. There is no coercion: an integer is not
/// returned by [`get_float64`](ConfigurationService::get_float64), a boolean is not
/// returned by [`get_string`](ConfigurationService::get_string). Use
/// [`has`](ConfigurationService::has) to tell a missing key from a mistyped one, and
/// `unwrap_or_default()` where the zero value is wanted.
///
/// # Examples
///
/// ```rust
/// use cfgstore::domain::{ConfigurationService, ConfigKey, ConfigValue, Mapping, Result};
/// use std::path::Path;
///
/// struct FixedService(Mapping);
///
/// impl ConfigurationService for FixedService {
///     fn load_config<P: AsRef<Path>>(&mut self, _path: P) -> Result<()> {
///         Ok(())
///     }
///
///     fn get<K: Into<ConfigKey>>(&self, key: K) -> Option<&ConfigValue> {
///         self.0.get(key.into().as_str())
///     }
///
///     fn all_settings(&self) -> Option<&Mapping> {
///         Some(&self.0)
///     }
/// }
///
/// let mut map = Mapping::new();
/// map.insert("port".to_string(), ConfigValue::Int(8080));
/// let service = FixedService(map);
///
/// assert_eq!(service.get_int("port"), Some(8080));
/// assert_eq!(service.get_string("port"), None);
/// ```
pub trait ConfigurationService {
    /// Reads and parses the file at `path`, replacing the current document.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The document was replaced
    /// * `Err(ConfigError::IoError)` - The file could not be read
    /// * `Err(ConfigError::ParseError)` - The file is not a valid document
    ///
    /// On error the previous document is kept.
    fn load_config<P: AsRef<Path>>(&mut self, path: P) -> Result<()>;

    /// Retrieves the raw value stored under a dotted key.
    ///
    /// Returns `None` if nothing has been loaded, if the key is empty, or if the path
    /// does not resolve.
    fn get<K: Into<ConfigKey>>(&self, key: K) -> Option<&ConfigValue>;

    /// Returns the whole document, or `None` if nothing has been loaded.
    ///
    /// The mapping is borrowed from the service, not copied.
    fn all_settings(&self) -> Option<&Mapping>;

    /// Checks if a value, of any type, is stored under the key.
    fn has<K: Into<ConfigKey>>(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Retrieves a string value.
    fn get_string<K: Into<ConfigKey>>(&self, key: K) -> Option<String> {
        typed(self, key.into(), "string", |v| v.as_str().map(str::to_string))
    }

    /// Retrieves a boolean value.
    fn get_bool<K: Into<ConfigKey>>(&self, key: K) -> Option<bool> {
        typed(self, key.into(), "bool", ConfigValue::as_bool)
    }

    /// Retrieves a signed integer value.
    fn get_int<K: Into<ConfigKey>>(&self, key: K) -> Option<i64> {
        typed(self, key.into(), "int", ConfigValue::as_i64)
    }

    /// Retrieves a non-negative integer value.
    fn get_uint<K: Into<ConfigKey>>(&self, key: K) -> Option<u64> {
        typed(self, key.into(), "uint", ConfigValue::as_u64)
    }

    /// Retrieves a floating point value. Integers are not converted.
    fn get_float64<K: Into<ConfigKey>>(&self, key: K) -> Option<f64> {
        typed(self, key.into(), "float", ConfigValue::as_f64)
    }

    /// Retrieves a list whose elements are all strings.
    ///
    /// A list holding any non-string element yields `None`, never a partial list.
    fn get_string_slice<K: Into<ConfigKey>>(&self, key: K) -> Option<Vec<String>> {
        typed(self, key.into(), "string list", ConfigValue::as_string_list)
    }

    /// Decodes the sub-tree stored under the key into `T`.
    ///
    /// Struct fields are matched to mapping keys ignoring case and `_` / `-`
    /// separators, so `DefaultExpirationSeconds` fills `default_expiration_seconds`.
    ///
    /// A field of `T` with no matching key is a decode error, unless the field is an
    /// `Option` (left `None`) or carries `#[serde(default)]`. Keys with no matching
    /// field are ignored unless `T` uses `#[serde(deny_unknown_fields)]`.
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - The decoded value
    /// * `Err(ConfigError::ConfigKeyNotFound)` - Nothing is stored under the key
    /// * `Err(ConfigError::DecodeError)` - The sub-tree does not fit `T`
    fn unmarshal_key<T, K>(&self, key: K) -> Result<T>
    where
        T: DeserializeOwned,
        K: Into<ConfigKey>,
    {
        let key = key.into();
        let value = self
            .get(&key)
            .ok_or_else(|| ConfigError::ConfigKeyNotFound {
                key: key.as_str().to_string(),
            })?;

        value
            .clone()
            .decode()
            .map_err(|source| ConfigError::DecodeError {
                key: key.into_string(),
                source,
            })
    }
}

/// Looks up `key` and applies an exact type check, logging mismatches.
fn typed<S, T, F>(service: &S, key: ConfigKey, expected: &str, check: F) -> Option<T>
where
    S: ConfigurationService + ?Sized,
    F: FnOnce(&ConfigValue) -> Option<T>,
{
    let value = service.get(&key)?;
    let result = check(value);
    if result.is_none() {
        tracing::trace!(
            "Key '{}' holds a {} value, not {}",
            key,
            value.type_name(),
            expected
        );
    }
    result
}
