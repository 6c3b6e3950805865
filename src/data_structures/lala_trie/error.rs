// Copyright (c) 2026 Lala Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lala Trie.

/// Errors that can occur in Lala Trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LalaTrieError {
    /// An empty key was given to an operation that requires at least one symbol.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// The key is absent, or present only as a prefix of longer keys.
    #[error("Key not found: '{0}'")]
    NotFound(String),
}
