// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default configuration store implementation.
//!
//! This module provides the default implementation of the `ConfigurationService`
//! trait: a store holding one parsed document, loaded from a file and queried by
//! dotted key.

use crate::adapters::{default_config_path, YamlParser};
use crate::domain::path::find;
use crate::domain::{ConfigKey, ConfigValue, ConfigurationService, Mapping, Result};
use crate::ports::ConfigParser;
use std::fmt;
use std::fs;
use std::path::Path;

/// Default implementation of the configuration service.
///
/// The store starts empty. Each successful load replaces the whole document; a
/// failed load leaves the previous document untouched. Before the first successful
/// load every lookup returns `None`.
///
/// Loading takes `&mut self` and lookups take `&self`, so a load can never overlap
/// a read. Share the store between threads behind your own lock if it must be
/// reloaded while readers exist.
///
/// # Examples
///
/// ```rust,no_run
/// use cfgstore::prelude::*;
///
/// # fn main() -> Result<()> {
/// let mut store = DefaultConfigStore::new();
/// store.load_config("config.yaml")?;
///
/// let timeout = store.get_int("context.timeoutMilliseconds").unwrap_or(1000);
/// let hosts = store.get_string_slice("safeHosts").unwrap_or_default();
/// # Ok(())
/// # }
/// ```
pub struct DefaultConfigStore {
    /// The loaded document, `None` until a load succeeds
    document: Option<Mapping>,
    /// Parser turning file content into a document
    parser: Box<dyn ConfigParser>,
}

impl DefaultConfigStore {
    /// Creates a new empty store that parses YAML.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cfgstore::prelude::*;
    ///
    /// let store = DefaultConfigStore::new();
    /// assert!(!store.is_loaded());
    /// assert_eq!(store.get("anything"), None);
    /// ```
    pub fn new() -> Self {
        Self::with_parser(Box::new(YamlParser::new()))
    }

    /// Creates a new empty store that parses documents with `parser`.
    pub fn with_parser(parser: Box<dyn ConfigParser>) -> Self {
        Self {
            document: None,
            parser,
        }
    }

    /// Returns `true` once a document has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    /// Parses `content` and replaces the current document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cfgstore::prelude::*;
    ///
    /// # fn main() -> Result<()> {
    /// let mut store = DefaultConfigStore::new();
    /// store.load_from_str("upgrade:\n  auto: true\n")?;
    /// assert_eq!(store.get_bool("upgrade.auto"), Some(true));
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from_str(&mut self, content: &str) -> Result<()> {
        let document = self.parser.parse(content).inspect_err(|e| {
            tracing::debug!("Failed to parse configuration: {}", e);
        })?;
        tracing::debug!("Loaded configuration with {} top-level keys", document.len());
        self.document = Some(document);
        Ok(())
    }

    /// Loads `filename` from the OS-appropriate configuration directory.
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
    /// use cfgstore::prelude::*;
    ///
    /// # fn main() -> Result<()> {
    /// let mut store = DefaultConfigStore::new();
    /// store.load_from_default_location("myapp", "com.example", "config.yaml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from_default_location(
        &mut self,
        app_name: &str,
        qualifier: &str,
        filename: &str,
    ) -> Result<()> {
        let path = default_config_path(app_name, qualifier, filename)?;
        self.load_config(path)
    }
}

impl Default for DefaultConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DefaultConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultConfigStore")
            .field("document", &self.document)
            .field("extensions", &self.parser.supported_extensions())
            .finish()
    }
}

impl ConfigurationService for DefaultConfigStore {
    fn load_config<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).inspect_err(|e| {
            tracing::debug!("Failed to read configuration file '{}': {}", path.display(), e);
        })?;
        self.load_from_str(&content)?;
        tracing::debug!("Configuration loaded from '{}'", path.display());
        Ok(())
    }

    fn get<K: Into<ConfigKey>>(&self, key: K) -> Option<&ConfigValue> {
        let document = self.document.as_ref()?;
        find(document, &key.into())
    }

    fn all_settings(&self) -> Option<&Mapping> {
        self.document.as_ref()
    }
}
