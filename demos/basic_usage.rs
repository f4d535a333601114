// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the configuration store.
//!
//! This example demonstrates:
//! - Loading a YAML file into a store
//! - Typed lookups by dotted key
//! - Telling a missing key from a mistyped one
//! - Decoding a table into a struct
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage -- tests/testdata/test.yml
//! ```

use cfgstore::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CacheSetting {
    default_expiration_seconds: u32,
    cleanup_interval_seconds: u32,
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/testdata/test.yml".to_string());

    println!("=== Configuration Store: Basic Usage ===\n");

    let mut store = DefaultConfigStore::new();
    store.load_config(&path)?;
    println!("Loaded {}\n", path);

    // Example 1: Typed values
    println!("--- Example 1: Typed Values ---");
    match store.get_int("context.timeoutMilliseconds") {
        Some(timeout) => println!("✓ context.timeoutMilliseconds: {} (as i64)", timeout),
        None => println!("✗ context.timeoutMilliseconds not set, using default: 1000"),
    }
    match store.get_bool("upgrade.weekly") {
        Some(weekly) => println!("✓ upgrade.weekly: {} (as bool)", weekly),
        None => println!("✗ upgrade.weekly not set"),
    }
    let hosts = store.get_string_slice("safeHosts").unwrap_or_default();
    println!("✓ safeHosts: {:?}", hosts);

    // Example 2: No coercion between types
    println!("\n--- Example 2: Exact Types ---");
    let key = "context.timeoutMilliseconds";
    if store.get_float64(key).is_none() && store.has(key) {
        println!("✗ {} exists but is not a float", key);
    }

    // Example 3: Decoding a table
    println!("\n--- Example 3: Decoding ---");
    match store.unmarshal_key::<CacheSetting, _>("cache.memory") {
        Ok(cache) => println!(
            "✓ cache.memory: expire after {}s, clean up every {}s",
            cache.default_expiration_seconds, cache.cleanup_interval_seconds
        ),
        Err(e) => println!("✗ {}", e),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
