// Copyright (c) 2026 Lala Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Print configuration module.
//!
//! Controls how the diagnostic dump of a trie is written.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest accepted indent width.
const MAX_INDENT_WIDTH: usize = 16;

/// Output format for trie dumps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrintFormat {
    /// Indented text, one node per line
    #[default]
    Text,
    /// One JSON object per node
    Json,
}

/// Print configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintConfig {
    /// Spaces added per tree level in text dumps
    pub indent_width: usize,

    /// Dump format
    pub format: PrintFormat,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            indent_width: 1,
            format: PrintFormat::Text,
        }
    }
}

impl Validate for PrintConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.indent_width == 0 || self.indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError::ValueOutOfRange {
                key: "print.indent_width".to_string(),
                message: format!("must be between 1 and {MAX_INDENT_WIDTH}"),
            });
        }

        Ok(())
    }
}
