//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_parts` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading hostnames and writing one result line per hostname
//!
//! All parsing is implemented in the library crate.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use domain_parts::app::{log_batch_statistics, read_hostnames, run_batch};
use domain_parts::config::APP_NAME;
use domain_parts::initialization::init_logger_with;
use domain_parts::{Config, HostnameParser, PslResolver};

fn run(config: &Config) -> Result<i32> {
    config.validate().context("Invalid configuration")?;

    let hostnames = read_hostnames(&config.hostnames, config.file.as_deref())?;
    let parser = HostnameParser::new(PslResolver::new());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = run_batch(&parser, &hostnames, config.output, &mut out)?;

    log_batch_statistics(&report);
    Ok(report.exit_code(config.fail_on))
}

fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(&config) {
        Ok(0) => Ok(()),
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{} error: {:#}", APP_NAME, e);
            process::exit(1);
        }
    }
}
