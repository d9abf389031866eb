//! Parse result types.

use std::fmt;
use std::net::IpAddr;

use serde::Serialize;

use crate::address::parse_ip_literal;
use crate::config::LABEL_SEPARATOR;

/// What a hostname turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostnameKind {
    Invalid,
    #[serde(rename = "ip")]
    IpLiteral,
    Domain,
}

impl fmt::Display for HostnameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HostnameKind::Invalid => "invalid",
            HostnameKind::IpLiteral => "ip",
            HostnameKind::Domain => "domain",
        })
    }
}

/// Who administers the effective top-level suffix of a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Management {
    /// Single-label suffix with no known delegation. Never appears in a
    /// successful parse.
    #[serde(rename = "Unmanaged")]
    Unmanaged,
    /// Suffix from the ICANN section of the Public Suffix List.
    #[serde(rename = "ICANN Managed")]
    IcannManaged,
    /// Multi-label suffix from the private section (dynamic DNS, hosting).
    #[serde(rename = "Privately Managed")]
    PrivatelyManaged,
}

impl Management {
    pub fn as_str(&self) -> &'static str {
        match self {
            Management::Unmanaged => "Unmanaged",
            Management::IcannManaged => "ICANN Managed",
            Management::PrivatelyManaged => "Privately Managed",
        }
    }
}

impl fmt::Display for Management {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successfully parsed hostname.
///
/// For `HostnameKind::Domain`, `subdomains`, `domain` and `suffix_labels`
/// joined with `.` give back the canonical hostname. For
/// `HostnameKind::IpLiteral` they are all empty and `management` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostnameRecord {
    /// The input, unmodified
    pub hostname: String,
    pub kind: HostnameKind,
    /// Registrable domain label
    pub domain: String,
    pub management: Option<Management>,
    /// Labels left of the registrable domain, left to right
    pub subdomains: Vec<String>,
    /// Labels of the effective top-level suffix, left to right
    pub suffix_labels: Vec<String>,
}

impl HostnameRecord {
    pub(crate) fn ip_literal(hostname: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            kind: HostnameKind::IpLiteral,
            domain: String::new(),
            management: None,
            subdomains: Vec::new(),
            suffix_labels: Vec::new(),
        }
    }

    pub fn is_ip(&self) -> bool {
        self.kind == HostnameKind::IpLiteral
    }

    /// The parsed address for IP literals, brackets removed.
    pub fn ip_addr(&self) -> Option<IpAddr> {
        if self.is_ip() {
            parse_ip_literal(&self.hostname)
        } else {
            None
        }
    }

    /// The effective top-level suffix, e.g. `"co.uk"`.
    pub fn suffix(&self) -> String {
        self.suffix_labels.join(&LABEL_SEPARATOR.to_string())
    }

    /// Domain plus suffix, e.g. `"amazon.co.uk"`. `None` for IP literals.
    pub fn registrable_domain(&self) -> Option<String> {
        if self.kind != HostnameKind::Domain {
            return None;
        }
        let mut parts = Vec::with_capacity(self.suffix_labels.len() + 1);
        parts.push(self.domain.as_str());
        parts.extend(self.suffix_labels.iter().map(String::as_str));
        Some(parts.join(&LABEL_SEPARATOR.to_string()))
    }

    /// All parts joined again. Equals the canonical form of `hostname` for
    /// domains; empty for IP literals.
    pub fn canonical(&self) -> String {
        if self.kind != HostnameKind::Domain {
            return String::new();
        }
        self.subdomains
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.domain.as_str()))
            .chain(self.suffix_labels.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(&LABEL_SEPARATOR.to_string())
    }
}
