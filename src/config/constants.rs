//! Configuration constants.
//!
//! Hostname syntax limits and the reserved names used by the sanitizer.

/// Separator between labels.
pub const LABEL_SEPARATOR: char = '.';

/// Maximum length of a canonical hostname, in bytes.
pub const MAX_DOMAIN_LENGTH: usize = 253;
/// Minimum length of a single label, in bytes.
pub const MIN_LABEL_LENGTH: usize = 1;
/// Maximum length of a single label, in bytes.
pub const MAX_LABEL_LENGTH: usize = 63;

/// Rightmost labels that are never treated as public domains.
///
/// The empty label only shows up for input like `"foo.."`, which label
/// validation already rejects; it is kept here so the check stands on its own.
pub const RESERVED_TOP_LABELS: &[&str] = &["", "localhost", "local", "example", "invalid", "test"];

/// Name of the binary, used in log module filters and error output.
pub const APP_NAME: &str = "domain_parts";
