// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration store implementation.
//!
//! This module contains the concrete implementation of the `ConfigurationService`
//! trait, which provides the main interface for accessing configuration values.

pub mod default_store;

// Re-export commonly used types
pub use default_store::DefaultConfigStore;
