// SPDX-License-Identifier: MIT OR Apache-2.0

//! A configuration store with typed lookup by dotted key path.
//!
//! This crate loads a YAML document into memory and answers questions about it:
//! what is stored under `"context.timeoutMilliseconds"`, is it an integer, and can
//! the `"cache.memory"` table be decoded into my settings struct.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and logic (`ConfigKey`, `ConfigValue`, path
//!   resolution, decoding, errors, the `ConfigurationService` trait)
//! - **Ports**: Trait definitions for pluggable pieces (`ConfigParser`)
//! - **Adapters**: Implementations of the ports (`YamlParser`)
//! - **Service**: The store that ties everything together (`DefaultConfigStore`)
//!
//! # Lookups
//!
//! - Keys are split on `.` and resolved one mapping level at a time. Keys that
//!   themselves contain a `.` cannot be addressed.
//! - Typed accessors (`get_string`, `get_bool`, `get_int`, `get_uint`,
//!   `get_float64`, `get_string_slice`) return `None` for a missing key and for a
//!   value of another type alike. Values are never coerced.
//! - `unmarshal_key` decodes a sub-tree into any `serde::Deserialize` type and
//!   reports a missing key and a shape mismatch as distinct errors.
//!
//! # Quick Start
//!
//! ```rust
//! use cfgstore::prelude::*;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct CacheSetting {
//!     default_expiration_seconds: u32,
//!     cleanup_interval_seconds: u32,
//! }
//!
//! # fn main() -> Result<()> {
//! let mut store = DefaultConfigStore::new();
//! store.load_from_str(
//!     "context:\n  timeoutMilliseconds: 3000\n\
//!      cache:\n  memory:\n    DefaultExpirationSeconds: 3600\n    CleanupIntervalSeconds: 60\n",
//! )?;
//!
//! assert_eq!(store.get_int("context.timeoutMilliseconds"), Some(3000));
//! assert_eq!(store.get_string("context.timeoutMilliseconds"), None);
//!
//! let cache: CacheSetting = store.unmarshal_key("cache.memory")?;
//! assert_eq!(cache.default_expiration_seconds, 3600);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::YamlParser;
    pub use crate::domain::{
        ConfigError, ConfigKey, ConfigValue, ConfigurationService, Mapping, Result,
    };
    pub use crate::ports::ConfigParser;
    pub use crate::service::DefaultConfigStore;
}
