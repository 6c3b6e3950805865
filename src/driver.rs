// Copyright (c) 2026 Lala Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Diagnostic driver behind the `lala` binary.
//!
//! Loads key lists and replays small command scripts against a `LalaTrie<i64>`,
//! writing each outcome and tree dumps to a caller-supplied writer.
//!
//! Script lines look like:
//!
//! ```text
//! # comment
//! insert ah don't know 7
//! search ah don't know
//! update b 1234
//! delete assign
//! print
//! ```
//!
//! The key is everything between the command word and the trailing value, so
//! keys may contain spaces.

use std::io::Write;

use crate::config::print::{PrintConfig, PrintFormat};
use crate::data_structures::lala_trie::LalaTrie;
use crate::error::script::ScriptError;
use crate::error::LalaResult;

/// A parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Insert or overwrite a key
    Insert {
        /// Key to insert
        key: String,
        /// Value to store
        value: i64,
    },
    /// Look a key up
    Search {
        /// Key to look up
        key: String,
    },
    /// Replace the value of an existing key
    Update {
        /// Key to update
        key: String,
        /// New value
        value: i64,
    },
    /// Remove a key
    Delete {
        /// Key to remove
        key: String,
    },
    /// Dump the whole tree
    Print,
}

/// Parses a whole script, skipping blank lines and `#` comments.
pub fn parse_script(text: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    let mut commands = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        commands.push(parse_line(index + 1, line)?);
    }
    Ok(commands)
}

fn parse_line(line: usize, text: &str) -> Result<ScriptCommand, ScriptError> {
    let (word, rest) = text.split_once(' ').unwrap_or((text, ""));

    match word {
        "insert" | "update" => {
            let (key, value) = parse_keyed_value(line, word, rest)?;
            Ok(if word == "insert" {
                ScriptCommand::Insert { key, value }
            } else {
                ScriptCommand::Update { key, value }
            })
        }
        "search" | "delete" => {
            let key = required_key(line, word, rest)?;
            Ok(if word == "search" {
                ScriptCommand::Search { key }
            } else {
                ScriptCommand::Delete { key }
            })
        }
        "print" => Ok(ScriptCommand::Print),
        _ => Err(ScriptError::UnknownCommand {
            line,
            command: word.to_string(),
        }),
    }
}

fn parse_keyed_value(line: usize, command: &str, rest: &str) -> Result<(String, i64), ScriptError> {
    let (key, found) = rest.rsplit_once(' ').unwrap_or(("", rest));
    let value = found.parse::<i64>().map_err(|_| ScriptError::InvalidValue {
        line,
        command: command.to_string(),
        found: found.to_string(),
    })?;
    Ok((required_key(line, command, key)?, value))
}

fn required_key(line: usize, command: &str, key: &str) -> Result<String, ScriptError> {
    // Runs of spaces around the key are separators, not key text.
    let key = key.trim();
    if key.is_empty() {
        return Err(ScriptError::MissingKey {
            line,
            command: command.to_string(),
        });
    }
    Ok(key.to_string())
}

/// Owns a trie and applies commands to it.
#[derive(Debug, Default)]
pub struct Driver {
    trie: LalaTrie<i64>,
    print: PrintConfig,
}

impl Driver {
    /// Creates a driver with an empty trie.
    pub fn new(print: PrintConfig) -> Self {
        Self {
            trie: LalaTrie::new(),
            print,
        }
    }

    /// The trie commands are applied to.
    pub fn trie(&self) -> &LalaTrie<i64> {
        &self.trie
    }

    /// Inserts every non-empty line as a key valued by its 0-based line number.
    ///
    /// Returns the number of keys inserted.
    pub fn load_keys(&mut self, text: &str) -> LalaResult<usize> {
        let mut inserted = 0;
        for (index, key) in text.lines().enumerate() {
            if key.is_empty() {
                continue;
            }
            self.trie.insert(key, index as i64)?;
            inserted += 1;
        }
        tracing::info!(inserted, nodes = self.trie.node_count(), "loaded keys");
        Ok(inserted)
    }

    /// Applies every command in order.
    pub fn run<W: Write>(&mut self, commands: &[ScriptCommand], out: &mut W) -> LalaResult<()> {
        for command in commands {
            self.execute(command, out)?;
        }
        Ok(())
    }

    /// Applies one command and writes its outcome.
    ///
    /// Failed trie operations are reported on `out` and do not stop the run;
    /// only write failures are returned as errors.
    pub fn execute<W: Write>(&mut self, command: &ScriptCommand, out: &mut W) -> LalaResult<()> {
        match command {
            ScriptCommand::Insert { key, value } => match self.trie.insert(key, *value) {
                Ok(Some(old)) => writeln!(out, "insert {key} = {value} (replaced {old})")?,
                Ok(None) => writeln!(out, "insert {key} = {value}")?,
                Err(e) => self.report_failure(out, "insert", e)?,
            },
            ScriptCommand::Search { key } => match self.trie.search(key) {
                Ok(value) => writeln!(out, "search {key} -> {value}")?,
                Err(e) => self.report_failure(out, "search", e)?,
            },
            ScriptCommand::Update { key, value } => match self.trie.update(key, *value) {
                Ok(old) => writeln!(out, "update {key}: {old} -> {value}")?,
                Err(e) => self.report_failure(out, "update", e)?,
            },
            ScriptCommand::Delete { key } => match self.trie.delete(key) {
                Ok(old) => writeln!(out, "delete {key} -> {old}")?,
                Err(e) => self.report_failure(out, "delete", e)?,
            },
            ScriptCommand::Print => self.dump(out)?,
        }
        Ok(())
    }

    /// Writes the whole tree in the configured format.
    pub fn dump<W: Write>(&self, out: &mut W) -> LalaResult<()> {
        match self.print.format {
            PrintFormat::Text => write!(out, "{}", self.trie.display(self.print.indent_width))?,
            PrintFormat::Json => {
                for visit in self.trie.traverse() {
                    serde_json::to_writer(&mut *out, &visit)?;
                    writeln!(out)?;
                }
            }
        }
        Ok(())
    }

    fn report_failure<W: Write, E: std::fmt::Display>(
        &self,
        out: &mut W,
        operation: &str,
        error: E,
    ) -> LalaResult<()> {
        tracing::warn!(operation, error = %error, "operation failed");
        writeln!(out, "{operation} failed: {error}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(driver: &mut Driver, script: &str) -> String {
        let commands = parse_script(script).unwrap();
        let mut out = Vec::new();
        driver.run(&commands, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_script() {
        let script = "\
# sample
insert ah don't know 7

search ah don't know
update b -3
delete and
print
";
        let commands = parse_script(script).unwrap();
        assert_eq!(
            commands,
            vec![
                ScriptCommand::Insert {
                    key: "ah don't know".to_string(),
                    value: 7
                },
                ScriptCommand::Search {
                    key: "ah don't know".to_string()
                },
                ScriptCommand::Update {
                    key: "b".to_string(),
                    value: -3
                },
                ScriptCommand::Delete {
                    key: "and".to_string()
                },
                ScriptCommand::Print,
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_script("fetch x"),
            Err(ScriptError::UnknownCommand {
                line: 1,
                command: "fetch".to_string()
            })
        );
        assert_eq!(
            parse_script("\ninsert key value"),
            Err(ScriptError::InvalidValue {
                line: 2,
                command: "insert".to_string(),
                found: "value".to_string()
            })
        );
        assert_eq!(
            parse_script("update 5"),
            Err(ScriptError::MissingKey {
                line: 1,
                command: "update".to_string()
            })
        );
        assert_eq!(
            parse_script("delete"),
            Err(ScriptError::MissingKey {
                line: 1,
                command: "delete".to_string()
            })
        );
    }

    #[test]
    fn test_parse_ignores_extra_separator_spaces() {
        let commands = parse_script("insert  two words   5\nsearch   two words").unwrap();
        assert_eq!(
            commands,
            vec![
                ScriptCommand::Insert {
                    key: "two words".to_string(),
                    value: 5
                },
                ScriptCommand::Search {
                    key: "two words".to_string()
                },
            ]
        );
        assert_eq!(
            parse_script("insert    5"),
            Err(ScriptError::MissingKey {
                line: 1,
                command: "insert".to_string()
            })
        );
    }

    #[test]
    fn test_run_reports_failures_without_stopping() {
        let mut driver = Driver::default();
        let output = run_script(
            &mut driver,
            "insert and 0\ninsert andromeda 4\ninsert and 1\nsearch andro\ndelete and\nsearch andromeda\n",
        );

        assert_eq!(
            output,
            "insert and = 0\n\
             insert andromeda = 4\n\
             insert and = 1 (replaced 0)\n\
             search failed: Key not found: 'andro'\n\
             delete and -> 1\n\
             search andromeda -> 4\n"
        );
        assert_eq!(driver.trie().len(), 1);
    }

    #[test]
    fn test_load_keys_uses_line_numbers() {
        let mut driver = Driver::default();
        assert_eq!(driver.load_keys("and\na\n\nb\n").unwrap(), 3);
        assert_eq!(driver.trie().search("b"), Ok(&3));
        assert_eq!(driver.trie().search("a"), Ok(&1));
    }

    #[test]
    fn test_dump_text_and_json() {
        let mut driver = Driver::new(PrintConfig {
            indent_width: 2,
            format: PrintFormat::Text,
        });
        driver.load_keys("ab").unwrap();
        assert_eq!(run_script(&mut driver, "print"), "a\n  b: 0\n");

        let mut driver = Driver::new(PrintConfig {
            indent_width: 1,
            format: PrintFormat::Json,
        });
        driver.load_keys("ab").unwrap();
        assert_eq!(
            run_script(&mut driver, "print"),
            "{\"symbol\":\"a\",\"value\":null,\"depth\":1}\n{\"symbol\":\"b\",\"value\":0,\"depth\":2}\n"
        );
    }
}
