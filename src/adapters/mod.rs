// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing parser implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer.

pub mod yaml_file;

pub use yaml_file::{default_config_path, YamlParser};
