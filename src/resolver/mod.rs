//! Public suffix resolution.
//!
//! The parser asks a [`SuffixResolver`] for the effective top-level suffix of
//! a hostname and whether that suffix is on the ICANN list. The answer is used
//! verbatim; the parser only splits it into labels.
//!
//! [`PslResolver`] is the production implementation, backed by the Public
//! Suffix List compiled into the `psl` crate. [`StaticResolver`] always gives
//! the same answer and is handy in tests.

use log::debug;
use psl::Type;

use crate::config::LABEL_SEPARATOR;

/// The effective top-level suffix of a hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSuffix {
    /// Separator-joined suffix, e.g. `"co.uk"`
    pub suffix: String,
    /// True if the matching rule is in the ICANN section of the list
    pub icann: bool,
}

impl ResolvedSuffix {
    pub fn new(suffix: impl Into<String>, icann: bool) -> Self {
        Self {
            suffix: suffix.into(),
            icann,
        }
    }

    /// An empty suffix that no rule manages.
    pub fn unmanaged() -> Self {
        Self::new(String::new(), false)
    }
}

/// Looks up the effective top-level suffix of a hostname.
///
/// Implementations must be pure: the same input gives the same answer for a
/// given list version. They receive the hostname exactly as the caller passed
/// it, including a trailing separator if there was one.
pub trait SuffixResolver {
    fn resolve(&self, hostname: &str) -> ResolvedSuffix;
}

impl<R: SuffixResolver + ?Sized> SuffixResolver for &R {
    fn resolve(&self, hostname: &str) -> ResolvedSuffix {
        (**self).resolve(hostname)
    }
}

impl<R: SuffixResolver + ?Sized> SuffixResolver for Box<R> {
    fn resolve(&self, hostname: &str) -> ResolvedSuffix {
        (**self).resolve(hostname)
    }
}

impl<R: SuffixResolver + ?Sized> SuffixResolver for std::sync::Arc<R> {
    fn resolve(&self, hostname: &str) -> ResolvedSuffix {
        (**self).resolve(hostname)
    }
}

/// Resolver backed by the compiled-in Public Suffix List.
///
/// Wildcard and exception rules are handled by `psl`. Hostnames whose last
/// label is unknown fall back to that label as the suffix, not ICANN managed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PslResolver;

impl PslResolver {
    pub fn new() -> Self {
        Self
    }
}

impl SuffixResolver for PslResolver {
    fn resolve(&self, hostname: &str) -> ResolvedSuffix {
        // An empty rightmost label matches no rule
        if hostname.is_empty() || hostname.ends_with(LABEL_SEPARATOR) {
            debug!("No suffix for \"{hostname}\": empty rightmost label");
            return ResolvedSuffix::unmanaged();
        }

        match psl::suffix(hostname.as_bytes()) {
            Some(suffix) => {
                let icann = matches!(suffix.typ(), Some(Type::Icann));
                let resolved = ResolvedSuffix::new(
                    String::from_utf8_lossy(suffix.as_bytes()).into_owned(),
                    icann,
                );
                debug!(
                    "Suffix for \"{hostname}\": \"{}\" (icann={}, known={})",
                    resolved.suffix,
                    icann,
                    suffix.is_known()
                );
                resolved
            }
            None => {
                debug!("No suffix for \"{hostname}\"");
                ResolvedSuffix::unmanaged()
            }
        }
    }
}

/// Resolver that returns the same answer for every hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticResolver {
    answer: ResolvedSuffix,
}

impl StaticResolver {
    pub fn new(suffix: impl Into<String>, icann: bool) -> Self {
        Self {
            answer: ResolvedSuffix::new(suffix, icann),
        }
    }
}

impl SuffixResolver for StaticResolver {
    fn resolve(&self, _hostname: &str) -> ResolvedSuffix {
        self.answer.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_psl_resolver_icann_suffixes() {
        let resolver = PslResolver::new();
        assert_eq!(
            resolver.resolve("amazon.co.uk"),
            ResolvedSuffix::new("co.uk", true)
        );
        assert_eq!(
            resolver.resolve("books.amazon.com"),
            ResolvedSuffix::new("com", true)
        );
    }

    #[test]
    fn test_psl_resolver_private_suffix() {
        let resolved = PslResolver::new().resolve("foo.dyndns.org");
        assert_eq!(resolved, ResolvedSuffix::new("dyndns.org", false));
    }

    #[test]
    fn test_psl_resolver_unknown_tld_falls_back_to_last_label() {
        let resolved = PslResolver::new().resolve("there.is.no.such-tld");
        assert_eq!(resolved, ResolvedSuffix::new("such-tld", false));
    }

    #[test]
    fn test_psl_resolver_trailing_separator_is_unmanaged() {
        assert_eq!(
            PslResolver::new().resolve("foo.example.com."),
            ResolvedSuffix::unmanaged()
        );
        assert_eq!(PslResolver::new().resolve(""), ResolvedSuffix::unmanaged());
    }

    #[test]
    fn test_static_resolver_ignores_input() {
        let resolver = StaticResolver::new("co.uk", true);
        assert_eq!(resolver.resolve("anything"), resolver.resolve("else"));
    }

    #[test]
    fn test_resolver_through_references() {
        let resolver = StaticResolver::new("com", true);
        let by_ref: &dyn SuffixResolver = &resolver;
        let boxed: Box<dyn SuffixResolver> = Box::new(resolver.clone());
        assert_eq!(by_ref.resolve("a.com"), boxed.resolve("a.com"));
    }
}
