// Copyright (c) 2026 Lala Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data structures for Lala.

pub mod lala_trie;

// Re-export common data structures
pub use lala_trie::{LalaTrie, LalaTrieError, LalaTrieResult};
