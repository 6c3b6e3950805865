// Copyright (c) 2026 Lala Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Crate-level tests for configuration and error reporting.
//!
//! Trie tests live next to the trie in `data_structures::lala_trie::tests`.


pub use test_utils::TestFixture;
