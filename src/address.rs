//! Literal IP address detection.
//!
//! A hostname is an IP literal if, after removing a leading `[` and a trailing
//! `]`, it parses as an IPv4 or IPv6 address. The two brackets are stripped
//! independently, so `"[::1"` and `"::1]"` are accepted too.

use std::net::IpAddr;

/// Removes one leading `[` and one trailing `]`, each only if present.
pub fn strip_brackets(hostname: &str) -> &str {
    let hostname = hostname.strip_prefix('[').unwrap_or(hostname);
    hostname.strip_suffix(']').unwrap_or(hostname)
}

/// Parses a (possibly bracketed) IP literal.
pub fn parse_ip_literal(hostname: &str) -> Option<IpAddr> {
    strip_brackets(hostname).parse::<IpAddr>().ok()
}

/// Returns true if `hostname` is a literal IPv4 or IPv6 address.
pub fn is_ip_literal(hostname: &str) -> bool {
    parse_ip_literal(hostname).is_some()
}
