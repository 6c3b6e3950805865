// Copyright (c) 2026 Lala Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lala Library
//!
//! An in-memory prefix tree ([`LalaTrie`]) mapping character keys to values,
//! plus the configuration, error, and driver plumbing used by the `lala`
//! binary to load keys, replay command scripts, and dump trees.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod driver;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::{LalaTrie, LalaTrieError, LalaTrieResult};

/// Version information for Lala.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
