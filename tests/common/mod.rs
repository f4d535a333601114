// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for the integration tests.

use cfgstore::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Path of the sample configuration shipped with the tests.
#[allow(dead_code)]
pub fn sample_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/testdata/test.yml")
}

/// Returns a store loaded from the sample configuration.
#[allow(dead_code)]
pub fn loaded_store() -> DefaultConfigStore {
    let mut store = DefaultConfigStore::new();
    store
        .load_config(sample_config_path())
        .expect("sample configuration should load");
    store
}

/// Writes `content` to a temporary file that lives as long as the returned handle.
#[allow(dead_code)]
pub fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().expect("temporary file");
    write!(temp_file, "{}", content).expect("write temporary file");
    temp_file
}
