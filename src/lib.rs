//! domain_parts library: hostname classification and decomposition
//!
//! Splits a hostname into subdomain labels, the registrable domain label and
//! the effective top-level suffix, using the Public Suffix List to find where
//! the suffix starts. IP literals are recognized and returned without
//! decomposition.
//!
//! # Example
//!
//! ```
//! use domain_parts::{parse, Management};
//!
//! let record = parse("books.amazon.co.uk").unwrap();
//! assert_eq!(record.domain, "amazon");
//! assert_eq!(record.subdomains, vec!["books"]);
//! assert_eq!(record.suffix_labels, vec!["co", "uk"]);
//! assert_eq!(record.management, Some(Management::IcannManaged));
//!
//! assert!(parse("127.0.0.1").unwrap().is_ip());
//! assert!(parse("localhost").is_err());
//! ```
//!
//! Use [`HostnameParser`] with your own [`SuffixResolver`] to parse against a
//! different suffix list.

mod address;
pub mod app;
pub mod config;
mod domain;
mod error_handling;
pub mod initialization;
mod resolver;
mod sanitize;

// Re-export public API
pub use address::{is_ip_literal, parse_ip_literal, strip_brackets};
pub use config::{Config, FailOn, LogFormat, LogLevel, OutputFormat};
pub use domain::{
    domain_index, management_for, partition, HostnameKind, HostnameParser, HostnameRecord,
    Management, Partition,
};
pub use error_handling::{
    ErrorKind, InitializationError, LabelError, LabelErrorKind, LabelErrors, ParseError,
};
pub use resolver::{PslResolver, ResolvedSuffix, StaticResolver, SuffixResolver};
pub use sanitize::{
    canonical, is_reserved_top_label, sanitize, validate_label, validate_labels,
    SanitizedHostname,
};

/// Parses `hostname` against the built-in Public Suffix List.
///
/// Shorthand for `HostnameParser::new(PslResolver).parse(hostname)`.
///
/// # Errors
///
/// See [`HostnameParser::parse`].
pub fn parse(hostname: &str) -> Result<HostnameRecord, ParseError> {
    HostnameParser::new(PslResolver).parse(hostname)
}
