//! Parsing against the compiled-in Public Suffix List.
//!
//! Only long-standing list entries are used so these tests do not break when
//! the `psl` crate ships a newer list.

use domain_parts::{parse, ErrorKind, HostnameKind, HostnameRecord, LabelErrorKind, Management};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn domain(
    hostname: &str,
    domain: &str,
    management: Management,
    subdomains: &[&str],
    suffix_labels: &[&str],
) -> HostnameRecord {
    HostnameRecord {
        hostname: hostname.to_string(),
        kind: HostnameKind::Domain,
        domain: domain.to_string(),
        management: Some(management),
        subdomains: strings(subdomains),
        suffix_labels: strings(suffix_labels),
    }
}

#[test]
fn test_icann_suffixes() {
    assert_eq!(
        parse("amazon.co.uk").unwrap(),
        domain("amazon.co.uk", "amazon", Management::IcannManaged, &[], &["co", "uk"])
    );
    assert_eq!(
        parse("books.amazon.co.uk").unwrap(),
        domain(
            "books.amazon.co.uk",
            "amazon",
            Management::IcannManaged,
            &["books"],
            &["co", "uk"]
        )
    );
    assert_eq!(
        parse("www.books.amazon.co.uk").unwrap(),
        domain(
            "www.books.amazon.co.uk",
            "amazon",
            Management::IcannManaged,
            &["www", "books"],
            &["co", "uk"]
        )
    );
    assert_eq!(
        parse("amazon.com").unwrap(),
        domain("amazon.com", "amazon", Management::IcannManaged, &[], &["com"])
    );
    assert_eq!(
        parse("play.golang.org").unwrap(),
        domain("play.golang.org", "golang", Management::IcannManaged, &["play"], &["org"])
    );
}

#[test]
fn test_private_suffixes() {
    assert_eq!(
        parse("foo.dyndns.org").unwrap(),
        domain(
            "foo.dyndns.org",
            "foo",
            Management::PrivatelyManaged,
            &[],
            &["dyndns", "org"]
        )
    );
}

#[test]
fn test_wildcard_private_suffix() {
    // *.0emm.com: the whole hostname is the suffix, label 1 becomes the domain
    assert_eq!(
        parse("a.0emm.com").unwrap(),
        domain("a.0emm.com", "0emm", Management::PrivatelyManaged, &["a"], &["com"])
    );
    assert_eq!(
        parse("0emm.com").unwrap(),
        domain("0emm.com", "0emm", Management::IcannManaged, &[], &["com"])
    );
}

#[test]
fn test_unknown_tlds_are_unmanaged() {
    for hostname in ["there.is.no.such-tld", "cromulent", "label.example.123a"] {
        let err = parse(hostname).unwrap_err();
        assert!(err.contains(ErrorKind::Unmanaged), "{hostname}: {err}");
    }
}

#[test]
fn test_trailing_separator_is_unmanaged() {
    assert!(parse("foo.example.com.")
        .unwrap_err()
        .contains(ErrorKind::Unmanaged));
}

#[test]
fn test_ip_literals() {
    for hostname in [
        "127.0.0.1",
        "0000:0000:0000:0000:0000:0000:0000:0001",
        "::1",
        "[::1]",
    ] {
        let record = parse(hostname).unwrap();
        assert_eq!(record.kind, HostnameKind::IpLiteral);
        assert_eq!(record.hostname, hostname);
        assert!(record.domain.is_empty());
        assert!(record.management.is_none());
        assert!(record.subdomains.is_empty());
        assert!(record.suffix_labels.is_empty());
    }
}

#[test]
fn test_sanitizer_failures() {
    assert!(parse("").unwrap_err().contains(ErrorKind::ReservedDomain));
    assert!(parse("localhost")
        .unwrap_err()
        .contains(ErrorKind::ReservedDomain));
    assert!(parse(&"verylongdomain".repeat(20))
        .unwrap_err()
        .contains(ErrorKind::DomainTooLong));
    assert!(parse("invalid√¶character.example.org")
        .unwrap_err()
        .contains(LabelErrorKind::InvalidCharacter));
    assert!(parse("-label.example.org")
        .unwrap_err()
        .contains(LabelErrorKind::StartsWithDash));
    assert!(parse("label-.example.org")
        .unwrap_err()
        .contains(LabelErrorKind::EndsWithDash));
    assert!(parse(".example.org")
        .unwrap_err()
        .contains(LabelErrorKind::TooShort));
    assert!(parse(
        "extremelylongsubdomainiswaytoolonglongerthanthemaximumlabellength.example.org"
    )
    .unwrap_err()
    .contains(LabelErrorKind::TooLong));
    assert!(parse("label.example.123")
        .unwrap_err()
        .contains(LabelErrorKind::LastLabelNumeric));
}

#[test]
fn test_reparsing_hostname_gives_equal_record() {
    for hostname in ["books.amazon.co.uk", "foo.dyndns.org", "a.0emm.com", "[::1]"] {
        let record = parse(hostname).unwrap();
        assert_eq!(parse(&record.hostname).unwrap(), record);
        assert_eq!(record.canonical(), if record.is_ip() { "" } else { hostname });
    }
}
