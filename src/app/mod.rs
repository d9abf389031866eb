//! Batch processing for the command-line binary.
//!
//! This module provides input reading, output rendering and statistics used
//! by the main application.

pub mod input;
pub mod output;
pub mod statistics;

use std::io::Write;

use anyhow::{Context, Result};
use log::warn;

use crate::config::OutputFormat;
use crate::domain::HostnameParser;
use crate::resolver::SuffixResolver;

// Re-export public API
pub use input::{read_hostname_lines, read_hostnames};
pub use output::render;
pub use statistics::{log_batch_statistics, BatchReport};

/// Parses every hostname and writes one rendered line per hostname to `out`.
///
/// Parse failures are reported in the output and counted, not returned.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub fn run_batch<R, W>(
    parser: &HostnameParser<R>,
    hostnames: &[String],
    format: OutputFormat,
    out: &mut W,
) -> Result<BatchReport>
where
    R: SuffixResolver,
    W: Write,
{
    let mut report = BatchReport::default();

    for hostname in hostnames {
        let result = parser.parse(hostname);
        if let Err(e) = &result {
            warn!("Failed to parse \"{}\": {}", hostname, e.kind());
        }
        writeln!(out, "{}", render(hostname, &result, format))
            .context("Failed to write output")?;
        report.record(&result);
    }

    out.flush().context("Failed to flush output")?;
    Ok(report)
}
