// Copyright (c) 2026 Lala Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lala - Main entrypoint.
//!
//! Loads configuration, initializes logging, and runs one diagnostic command
//! against an in-memory trie.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lala_lib::config::{self, ConfigLoader, LalaConfig, LogConfig};
use lala_lib::driver::{self, Driver};
use lala_lib::error::{
    report_error, set_error_reporter, ErrorContext, LalaError, LalaResult, TracingErrorReporter,
};

/// Command line arguments for Lala.
#[derive(Parser, Debug)]
#[clap(name = "lala", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Insert every line of a file as a key and dump the tree
    Load {
        /// File with one key per line
        input: PathBuf,
    },

    /// Replay a script of insert/search/update/delete/print commands
    Run {
        /// Script file
        script: PathBuf,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// Logs go to stderr so dumps on stdout stay clean.
fn init_logging(log: &LogConfig) -> LalaResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| LalaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn run(args: Args) -> anyhow::Result<()> {
    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let lala_config = loader.load().map_err(LalaError::from)?;

    init_logging(&lala_config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));
    config::init_global_config(lala_config);

    let print = config::global_config().print.clone();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Load { input } => {
            let text = read_input(&input)?;
            let mut driver = Driver::new(print);
            driver.load_keys(&text)?;
            driver.dump(&mut out)?;
        }
        Command::Run { script } => {
            let text = read_input(&script)?;
            let commands = driver::parse_script(&text).map_err(LalaError::from)?;
            info!(commands = commands.len(), "running script");
            Driver::new(print).run(&commands, &mut out)?;
        }
        Command::Validate => {
            info!("Configuration validated successfully");
        }
        Command::GenConfig { output } => {
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(LalaError::Io)?;
            }

            let toml = toml::to_string_pretty(&LalaConfig::default())
                .map_err(|e| LalaError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml).map_err(LalaError::Io)?;

            info!("Default configuration written to {:?}", output);
        }
    }

    out.flush()?;
    Ok(())
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(ErrorContext::new(LalaError::Custom(format!("{e:#}")), "main"));
            ExitCode::FAILURE
        }
    }
}
