// Copyright (c) 2026 Lala Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Errors raised while parsing driver scripts.

use thiserror::Error;

/// A malformed line in a driver script.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The first word is not a known command.
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand {
        /// 1-based line number
        line: usize,
        /// The offending word
        command: String,
    },

    /// A command is missing its key.
    #[error("line {line}: '{command}' needs a key")]
    MissingKey {
        /// 1-based line number
        line: usize,
        /// The command missing its key
        command: String,
    },

    /// A command's trailing value is absent or not an integer.
    #[error("line {line}: '{command}' needs an integer value, got '{found}'")]
    InvalidValue {
        /// 1-based line number
        line: usize,
        /// The command with the bad value
        command: String,
        /// The text found where the value was expected
        found: String,
    },
}
