//! Batch statistics.

use std::collections::{HashMap, HashSet};

use log::info;
use strum::IntoEnumIterator;

use crate::config::FailOn;
use crate::domain::HostnameRecord;
use crate::error_handling::{ErrorKind, ParseError};

/// Outcome counts of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Hostnames processed
    pub total: usize,
    /// Hostnames parsed successfully (domains and IP literals)
    pub parsed: usize,
    /// Hostnames that failed to parse
    pub failed: usize,
    /// Successful parses that were IP literals
    pub ip_literals: usize,
    /// Failure kinds seen; a hostname with several label failures counts once
    /// per kind
    pub kind_counts: HashMap<ErrorKind, usize>,
}

impl BatchReport {
    /// Adds one parse result to the counts.
    pub fn record(&mut self, result: &Result<HostnameRecord, ParseError>) {
        self.total += 1;
        match result {
            Ok(record) => {
                self.parsed += 1;
                if record.is_ip() {
                    self.ip_literals += 1;
                }
            }
            Err(e) => {
                self.failed += 1;
                let kinds: HashSet<ErrorKind> = e.kinds().into_iter().collect();
                for kind in kinds {
                    *self.kind_counts.entry(kind).or_insert(0) += 1;
                }
            }
        }
    }

    pub fn kind_count(&self, kind: ErrorKind) -> usize {
        self.kind_counts.get(&kind).copied().unwrap_or(0)
    }

    /// Exit status for the given policy: 0, or 2 when it is violated.
    pub fn exit_code(&self, fail_on: FailOn) -> i32 {
        match fail_on {
            FailOn::Never => 0,
            FailOn::Any if self.failed > 0 => 2,
            FailOn::Any => 0,
        }
    }
}

/// Logs the summary and per-kind failure counts at info level.
pub fn log_batch_statistics(report: &BatchReport) {
    info!(
        "Parsed {} of {} hostname(s) ({} IP literal(s), {} failed)",
        report.parsed, report.total, report.ip_literals, report.failed
    );
    for kind in ErrorKind::iter() {
        let count = report.kind_count(kind);
        if count > 0 {
            info!("   {}: {}", kind, count);
        }
    }
}
