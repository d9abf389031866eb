//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use super::APP_NAME;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How parse results are written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per hostname
    Plain,
    /// One JSON object per line
    Json,
}

/// When the process should exit with a failure status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once all input was processed
    Never,
    /// Exit 2 if any hostname failed to parse
    Any,
}

/// Command-line configuration.
///
/// # Examples
///
/// ```bash
/// # Parse hostnames given on the command line
/// domain_parts books.amazon.co.uk 127.0.0.1
///
/// # Parse a file of hostnames, one per line, as JSON lines
/// domain_parts --file hosts.txt --output json
///
/// # Read from stdin
/// cat hosts.txt | domain_parts --file -
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = APP_NAME,
    about = "Splits hostnames into subdomains, registrable domain and public suffix."
)]
pub struct Config {
    /// Hostnames to parse
    pub hostnames: Vec<String>,

    /// File to read hostnames from, one per line ("-" for stdin)
    #[arg(long, short = 'f', value_parser)]
    pub file: Option<PathBuf>,

    /// Output format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Exit status policy: never|any
    #[arg(long, value_enum, default_value_t = FailOn::Any)]
    pub fail_on: FailOn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hostnames: Vec::new(),
            file: None,
            output: OutputFormat::Plain,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            fail_on: FailOn::Any,
        }
    }
}

/// A configuration value that cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending option
    pub field: &'static str,
    /// What is wrong and how to fix it
    pub message: String,
}

impl Config {
    /// Checks that the configuration describes some input to parse.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.hostnames.is_empty() && self.file.is_none() {
            return Err(ConfigValidationError {
                field: "hostnames",
                message: "pass at least one hostname or --file <PATH> (use \"-\" for stdin)"
                    .to_string(),
            });
        }
        if let Some(file) = &self.file {
            if file.as_os_str().is_empty() {
                return Err(ConfigValidationError {
                    field: "file",
                    message: "path must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
