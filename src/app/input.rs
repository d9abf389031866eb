//! Hostname input reading.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

/// Reads hostnames from a line-oriented reader.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
/// Trimming happens here, on input lines, not during parsing.
pub fn read_hostname_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut hostnames = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        hostnames.push(trimmed.to_string());
    }
    Ok(hostnames)
}

/// Collects hostnames from the command line followed by `file`, if any.
///
/// A file path of `-` reads from stdin.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn read_hostnames(arguments: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut hostnames = arguments.to_vec();

    if let Some(path) = file {
        let from_file = if path.as_os_str() == "-" {
            info!("Reading hostnames from stdin");
            read_hostname_lines(io::stdin().lock()).context("Failed to read hostnames from stdin")?
        } else {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            read_hostname_lines(BufReader::new(file))
                .with_context(|| format!("Failed to read input file {}", path.display()))?
        };
        info!("Read {} hostname(s) from input", from_file.len());
        hostnames.extend(from_file);
    }

    Ok(hostnames)
}
