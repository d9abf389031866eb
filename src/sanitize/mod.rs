//! Hostname sanitization and label validation.
//!
//! Turns a raw (non-IP) hostname into its label sequence:
//! - `canonical()` strips a single trailing separator
//! - `validate_label()` / `validate_labels()` check label syntax and collect
//!   every failure instead of stopping at the first one
//! - `sanitize()` runs the whole pipeline, including the length limit and the
//!   reserved-name check
//!
//! Nothing here lower-cases, trims or decodes the input.

use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use crate::config::{
    LABEL_SEPARATOR, MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH, MIN_LABEL_LENGTH, RESERVED_TOP_LABELS,
};
use crate::domain::HostnameKind;
use crate::error_handling::{LabelError, LabelErrors, ParseError};

// ASCII-only classes: `\d` and `(?i)` would let Unicode digits and letters through.
static INVALID_LABEL_CHARACTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z-]").expect("invalid label character class"));
static LETTER_OR_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z-]").expect("letter or dash class"));

/// A hostname that passed sanitization, split into labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedHostname<'a> {
    /// Always [`HostnameKind::Domain`] for sanitized input.
    pub kind: HostnameKind,
    /// Labels left to right; never empty.
    pub labels: Vec<&'a str>,
}

/// Removes exactly one trailing label separator, if present.
///
/// `"foo.com."` becomes `"foo.com"`, `"foo.com.."` becomes `"foo.com."`.
pub fn canonical(hostname: &str) -> &str {
    hostname.strip_suffix(LABEL_SEPARATOR).unwrap_or(hostname)
}

/// Checks a single label, returning every rule it breaks.
///
/// The checks are independent: a label can fail charset, both dash rules and
/// a length rule at once.
pub fn validate_label(label: &str) -> Vec<LabelError> {
    let mut errors = Vec::new();

    if INVALID_LABEL_CHARACTERS.is_match(label) {
        errors.push(LabelError::InvalidCharacter(label.to_string()));
    }

    if label.starts_with('-') {
        errors.push(LabelError::StartsWithDash(label.to_string()));
    }
    if label.ends_with('-') {
        errors.push(LabelError::EndsWithDash(label.to_string()));
    }

    let length = label.len();
    if length < MIN_LABEL_LENGTH {
        errors.push(LabelError::TooShort {
            label: label.to_string(),
            length,
        });
    } else if length > MAX_LABEL_LENGTH {
        errors.push(LabelError::TooLong {
            label: label.to_string(),
            length,
        });
    }

    errors
}

/// Validates every label plus the rule that the rightmost label must not be
/// all digits.
///
/// Returns `Ok(())` only if no label failed; otherwise all failures, in label
/// order, with the last-label check appended at the end.
pub fn validate_labels(labels: &[&str]) -> Result<(), LabelErrors> {
    let mut errors: Vec<LabelError> = labels.iter().flat_map(|l| validate_label(l)).collect();

    if let Some(last) = labels.last() {
        if !LETTER_OR_DASH.is_match(last) {
            errors.push(LabelError::LastLabelNumeric((*last).to_string()));
        }
    }

    trace!(
        "Validated {} label(s), {} failure(s)",
        labels.len(),
        errors.len()
    );

    match LabelErrors::new(errors) {
        Some(errors) => Err(errors),
        None => Ok(()),
    }
}

/// Returns true if `label` may not be the rightmost label of a public domain.
pub fn is_reserved_top_label(label: &str) -> bool {
    RESERVED_TOP_LABELS.contains(&label)
}

/// Sanitizes a hostname that is known not to be an IP literal.
///
/// # Errors
///
/// Stops at the first failing step:
/// - `ParseError::ReservedDomain` for empty input
/// - `ParseError::DomainTooLong` if the canonical form exceeds 253 bytes
/// - `ParseError::Labels` with every label failure found
/// - `ParseError::ReservedDomain` if the rightmost label is reserved
pub fn sanitize(hostname: &str) -> Result<SanitizedHostname<'_>, ParseError> {
    if hostname.is_empty() {
        return Err(ParseError::ReservedDomain(String::new()));
    }

    let canonical = canonical(hostname);
    if canonical.len() > MAX_DOMAIN_LENGTH {
        return Err(ParseError::DomainTooLong {
            hostname: hostname.to_string(),
            length: canonical.len(),
        });
    }

    let labels: Vec<&str> = canonical.split(LABEL_SEPARATOR).collect();
    validate_labels(&labels)?;

    // split() always yields at least one item
    let last = labels.last().copied().unwrap_or_default();
    if is_reserved_top_label(last) {
        return Err(ParseError::ReservedDomain(last.to_string()));
    }

    Ok(SanitizedHostname {
        kind: HostnameKind::Domain,
        labels,
    })
}
