//! Rendering of parse results.

use serde_json::json;

use crate::config::OutputFormat;
use crate::domain::{HostnameKind, HostnameRecord};
use crate::error_handling::ParseError;

/// Renders one parse result as a single output line (without newline).
pub fn render(
    hostname: &str,
    result: &Result<HostnameRecord, ParseError>,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Plain => render_plain(hostname, result),
        OutputFormat::Json => render_json(hostname, result),
    }
}

fn render_plain(hostname: &str, result: &Result<HostnameRecord, ParseError>) -> String {
    match result {
        Ok(record) if record.kind == HostnameKind::IpLiteral => {
            format!("{hostname}\tip")
        }
        Ok(record) => format!(
            "{hostname}\tdomain={}\tsuffix={}\tsubdomains={}\t{}",
            record.domain,
            record.suffix(),
            record.subdomains.join(","),
            record
                .management
                .map(|m| m.as_str())
                .unwrap_or_default()
        ),
        // Multi-line label errors are flattened onto one line
        Err(e) => format!("{hostname}\terror: {}", e.to_string().replace("\n\t", " ")),
    }
}

fn render_json(hostname: &str, result: &Result<HostnameRecord, ParseError>) -> String {
    let value = match result {
        Ok(record) => json!({
            "hostname": hostname,
            "ok": true,
            "record": record,
        }),
        Err(e) => json!({
            "hostname": hostname,
            "ok": false,
            "error": e.to_string(),
            "kinds": e.kinds().iter().map(|k| k.as_str()).collect::<Vec<_>>(),
        }),
    };
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HostnameParser;
    use crate::resolver::StaticResolver;

    fn parse(hostname: &str) -> Result<HostnameRecord, ParseError> {
        HostnameParser::new(StaticResolver::new("co.uk", true)).parse(hostname)
    }

    #[test]
    fn test_render_plain_domain() {
        let line = render("books.amazon.co.uk", &parse("books.amazon.co.uk"), OutputFormat::Plain);
        assert_eq!(
            line,
            "books.amazon.co.uk\tdomain=amazon\tsuffix=co.uk\tsubdomains=books\tICANN Managed"
        );
    }

    #[test]
    fn test_render_plain_ip_and_error() {
        assert_eq!(render("::1", &parse("::1"), OutputFormat::Plain), "::1\tip");
        let line = render("-a.b-.co.uk", &parse("-a.b-.co.uk"), OutputFormat::Plain);
        assert!(line.starts_with("-a.b-.co.uk\terror: Label error(s): - labels cannot start"));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_render_json_success() {
        let line = render("amazon.co.uk", &parse("amazon.co.uk"), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["record"]["domain"], "amazon");
        assert_eq!(value["record"]["management"], "ICANN Managed");
    }

    #[test]
    fn test_render_json_error_lists_kinds() {
        let line = render("localhost", &parse("localhost"), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["error"], "domain is reserved: \"localhost\"");
        assert_eq!(value["kinds"], serde_json::json!(["reserved domain"]));
    }
}
