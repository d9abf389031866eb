//! Error type definitions.
//!
//! This module defines the parse failures reported for a hostname, the
//! aggregate that carries every label failure found in one pass, and the
//! errors raised while setting up the binary.

use std::fmt;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::{MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH, MIN_LABEL_LENGTH};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Every category of failure `parse` can report.
///
/// Used for membership queries on [`ParseError`] and [`LabelErrors`] and for
/// the per-kind counts of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    ReservedDomain,
    DomainTooLong,
    InvalidCharacter,
    StartsWithDash,
    EndsWithDash,
    TooShort,
    TooLong,
    LastLabelNumeric,
    Unmanaged,
    SuffixMismatch,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ReservedDomain => "reserved domain",
            ErrorKind::DomainTooLong => "domain too long",
            ErrorKind::InvalidCharacter => "invalid character",
            ErrorKind::StartsWithDash => "label starts with dash",
            ErrorKind::EndsWithDash => "label ends with dash",
            ErrorKind::TooShort => "label too short",
            ErrorKind::TooLong => "label too long",
            ErrorKind::LastLabelNumeric => "last label numeric",
            ErrorKind::Unmanaged => "unmanaged",
            ErrorKind::SuffixMismatch => "suffix mismatch",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The subset of [`ErrorKind`] that is reported per label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LabelErrorKind {
    InvalidCharacter,
    StartsWithDash,
    EndsWithDash,
    TooShort,
    TooLong,
    LastLabelNumeric,
}

impl From<LabelErrorKind> for ErrorKind {
    fn from(kind: LabelErrorKind) -> Self {
        match kind {
            LabelErrorKind::InvalidCharacter => ErrorKind::InvalidCharacter,
            LabelErrorKind::StartsWithDash => ErrorKind::StartsWithDash,
            LabelErrorKind::EndsWithDash => ErrorKind::EndsWithDash,
            LabelErrorKind::TooShort => ErrorKind::TooShort,
            LabelErrorKind::TooLong => ErrorKind::TooLong,
            LabelErrorKind::LastLabelNumeric => ErrorKind::LastLabelNumeric,
        }
    }
}

/// A single syntax failure found in one label.
///
/// Length-related variants carry the byte length of the label; the bound
/// they violated is part of the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// The label contains something other than ASCII letters, digits or `-`.
    #[error("invalid character(s) found in label \"{0}\"")]
    InvalidCharacter(String),

    #[error("labels cannot start with a dash (\"{0}\")")]
    StartsWithDash(String),

    #[error("labels cannot end with a dash (\"{0}\")")]
    EndsWithDash(String),

    #[error("label is too short. Minimum length is {}, got \"{label}\" (length {length})", MIN_LABEL_LENGTH)]
    TooShort { label: String, length: usize },

    #[error("label is too long. Maximum length is {}, got \"{label}\" (length {length})", MAX_LABEL_LENGTH)]
    TooLong { label: String, length: usize },

    /// The rightmost label has no letter or dash.
    #[error("last label must not be all-numeric. Got \"{0}\"")]
    LastLabelNumeric(String),
}

impl LabelError {
    pub fn kind(&self) -> LabelErrorKind {
        match self {
            LabelError::InvalidCharacter(_) => LabelErrorKind::InvalidCharacter,
            LabelError::StartsWithDash(_) => LabelErrorKind::StartsWithDash,
            LabelError::EndsWithDash(_) => LabelErrorKind::EndsWithDash,
            LabelError::TooShort { .. } => LabelErrorKind::TooShort,
            LabelError::TooLong { .. } => LabelErrorKind::TooLong,
            LabelError::LastLabelNumeric(_) => LabelErrorKind::LastLabelNumeric,
        }
    }

    /// The label text the failure refers to.
    pub fn label(&self) -> &str {
        match self {
            LabelError::InvalidCharacter(label)
            | LabelError::StartsWithDash(label)
            | LabelError::EndsWithDash(label)
            | LabelError::LastLabelNumeric(label) => label,
            LabelError::TooShort { label, .. } | LabelError::TooLong { label, .. } => label,
        }
    }
}

/// Every label failure found in one hostname, in the order they were found.
///
/// Never empty: the only constructor refuses an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelErrors {
    errors: Vec<LabelError>,
}

impl LabelErrors {
    /// Wraps the collected failures, or returns `None` if there are none.
    pub(crate) fn new(errors: Vec<LabelError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn errors(&self) -> &[LabelError] {
        &self.errors
    }

    /// The first failure found.
    pub fn first(&self) -> &LabelError {
        &self.errors[0]
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabelError> {
        self.errors.iter()
    }

    /// Returns true if any collected failure is of the given kind.
    ///
    /// Accepts either a [`LabelErrorKind`] or an [`ErrorKind`]; top-level
    /// kinds never match.
    pub fn contains(&self, kind: impl Into<ErrorKind>) -> bool {
        let kind = kind.into();
        self.errors
            .iter()
            .any(|e| ErrorKind::from(e.kind()) == kind)
    }
}

impl<'a> IntoIterator for &'a LabelErrors {
    type Item = &'a LabelError;
    type IntoIter = std::slice::Iter<'a, LabelError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for LabelErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Label error(s):")?;
        for error in &self.errors {
            write!(f, "\n\t- {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for LabelErrors {}

/// Why a hostname could not be decomposed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Empty input, or the rightmost label is a reserved name.
    #[error("domain is reserved: \"{0}\"")]
    ReservedDomain(String),

    /// The canonical hostname is longer than 253 bytes.
    #[error("domain is too long. Maximum length is {}, got \"{hostname}\" (length {length})", MAX_DOMAIN_LENGTH)]
    DomainTooLong { hostname: String, length: usize },

    /// One or more labels failed syntax validation.
    #[error(transparent)]
    Labels(#[from] LabelErrors),

    /// The suffix is neither on the ICANN list nor a multi-label private suffix.
    #[error("unmanaged hostname: \"{0}\"")]
    Unmanaged(String),

    /// The resolver reported a suffix that cannot be lined up with the labels.
    #[error("suffix \"{suffix}\" does not fit hostname \"{hostname}\"")]
    SuffixMismatch { hostname: String, suffix: String },
}

impl ParseError {
    /// The top-level kind. For aggregated label failures this is the kind of
    /// the first failure; use [`ParseError::contains`] to query the rest.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::ReservedDomain(_) => ErrorKind::ReservedDomain,
            ParseError::DomainTooLong { .. } => ErrorKind::DomainTooLong,
            ParseError::Labels(errors) => errors.first().kind().into(),
            ParseError::Unmanaged(_) => ErrorKind::Unmanaged,
            ParseError::SuffixMismatch { .. } => ErrorKind::SuffixMismatch,
        }
    }

    /// Every kind this error carries: one for top-level failures, one per
    /// collected failure for label errors.
    pub fn kinds(&self) -> Vec<ErrorKind> {
        match self {
            ParseError::Labels(errors) => errors.iter().map(|e| e.kind().into()).collect(),
            other => vec![other.kind()],
        }
    }

    /// Returns true if this error is, or aggregates, a failure of `kind`.
    pub fn contains(&self, kind: impl Into<ErrorKind>) -> bool {
        let kind = kind.into();
        match self {
            ParseError::Labels(errors) => errors.contains(kind),
            other => other.kind() == kind,
        }
    }

    pub fn label_errors(&self) -> Option<&LabelErrors> {
        match self {
            ParseError::Labels(errors) => Some(errors),
            _ => None,
        }
    }
}
