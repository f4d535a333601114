// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the interfaces
//! the configuration store depends on. These traits are implemented by adapters
//! in the adapters layer.

pub mod parser;

// Re-export commonly used types
pub use parser::ConfigParser;
