//! Hostname decomposition.
//!
//! This module splits a hostname into subdomains, registrable domain and
//! effective top-level suffix, or recognizes it as an IP literal.
//!
//! Key items:
//! - `HostnameParser` - parser over an injected `SuffixResolver`
//! - `partition()` - the index arithmetic that lines labels up with a suffix
//! - `HostnameRecord` - the result of a successful parse

mod types;

use log::debug;

use crate::address::is_ip_literal;
use crate::config::LABEL_SEPARATOR;
use crate::error_handling::ParseError;
use crate::resolver::{PslResolver, ResolvedSuffix, SuffixResolver};
use crate::sanitize::sanitize;

pub use types::{HostnameKind, HostnameRecord, Management};

/// Labels of a domain split around its registrable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<'a> {
    pub subdomains: &'a [&'a str],
    pub domain: &'a str,
    pub suffix_labels: &'a [&'a str],
}

/// Classifies a resolver answer.
///
/// ICANN suffixes are ICANN managed; anything else with at least two labels
/// is privately managed; a single non-ICANN label is unmanaged.
pub fn management_for(resolved: &ResolvedSuffix) -> Management {
    if resolved.icann {
        Management::IcannManaged
    } else if resolved.suffix.contains(LABEL_SEPARATOR) {
        Management::PrivatelyManaged
    } else {
        Management::Unmanaged
    }
}

/// Index of the registrable label among `label_count` labels when the suffix
/// has `suffix_label_count` labels.
///
/// When the suffix covers the whole hostname (`label_count ==
/// suffix_label_count`) the index is 1, not "no domain". This happens with
/// wildcard rules such as `*.0emm.com` matching `a.0emm.com`. Returns `None`
/// when the index falls outside the labels.
// The forced index 1 is relied upon by existing callers; do not change it
// without review.
pub fn domain_index(label_count: usize, suffix_label_count: usize) -> Option<usize> {
    let index = if label_count == suffix_label_count {
        debug!("Suffix spans all {label_count} label(s), using label 1 as domain");
        1
    } else {
        label_count.checked_sub(suffix_label_count + 1)?
    };
    (index < label_count).then_some(index)
}

/// Splits `labels` into subdomains, registrable domain and suffix labels for a
/// suffix of `suffix_label_count` labels.
pub fn partition<'a>(labels: &'a [&'a str], suffix_label_count: usize) -> Option<Partition<'a>> {
    let i = domain_index(labels.len(), suffix_label_count)?;
    Some(Partition {
        subdomains: &labels[..i],
        domain: labels[i],
        suffix_labels: &labels[i + 1..],
    })
}

/// Parses hostnames against a suffix resolver.
///
/// The parser holds no mutable state; share one across threads if the
/// resolver is `Sync`.
#[derive(Debug, Clone, Default)]
pub struct HostnameParser<R = PslResolver> {
    resolver: R,
}

impl<R: SuffixResolver> HostnameParser<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Decomposes `hostname`.
    ///
    /// IP literals (optionally bracketed) short-circuit before sanitization
    /// and never reach the resolver.
    ///
    /// # Errors
    ///
    /// - `ParseError::ReservedDomain`, `ParseError::DomainTooLong` or
    ///   `ParseError::Labels` from sanitization
    /// - `ParseError::Unmanaged` if the suffix is neither ICANN nor a
    ///   multi-label private suffix
    /// - `ParseError::SuffixMismatch` if the resolver's suffix cannot be lined
    ///   up with the hostname's labels
    pub fn parse(&self, hostname: &str) -> Result<HostnameRecord, ParseError> {
        if is_ip_literal(hostname) {
            debug!("\"{hostname}\" is an IP literal");
            return Ok(HostnameRecord::ip_literal(hostname));
        }

        let sanitized = sanitize(hostname)?;
        let labels = sanitized.labels;

        let resolved = self.resolver.resolve(hostname);
        let management = management_for(&resolved);
        if management == Management::Unmanaged {
            return Err(ParseError::Unmanaged(hostname.to_string()));
        }

        let suffix_label_count = resolved.suffix.split(LABEL_SEPARATOR).count();
        let parts = partition(&labels, suffix_label_count).ok_or_else(|| {
            ParseError::SuffixMismatch {
                hostname: hostname.to_string(),
                suffix: resolved.suffix.clone(),
            }
        })?;

        debug!(
            "Parsed \"{hostname}\": domain=\"{}\", suffix=\"{}\" ({management})",
            parts.domain, resolved.suffix
        );

        Ok(HostnameRecord {
            hostname: hostname.to_string(),
            kind: sanitized.kind,
            domain: parts.domain.to_string(),
            management: Some(management),
            subdomains: parts.subdomains.iter().map(|s| s.to_string()).collect(),
            suffix_labels: parts.suffix_labels.iter().map(|s| s.to_string()).collect(),
        })
    }
}
