// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and logic.
//!
//! This module contains the configuration value model, key paths, path resolution,
//! structural decoding and the error types. It is independent of any file format.

pub mod config_key;
pub mod config_value;
mod decode;
pub mod errors;
pub(crate) mod path;
pub mod service;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::{ConfigValue, Mapping};
pub use errors::{ConfigError, DecodeError, Result};
pub use service::ConfigurationService;
