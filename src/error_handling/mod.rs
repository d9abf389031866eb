//! Error handling for hostname parsing.
//!
//! This module provides:
//! - `ParseError`, the single error returned by `parse`
//! - `LabelErrors`, the aggregate of every label failure found in one pass
//! - `ErrorKind` / `LabelErrorKind` for membership queries and statistics
//! - `InitializationError` for binary setup
//!
//! Sanitizer steps fail fast, except label validation which is exhaustive:
//! all failures across all labels land in one `LabelErrors`.

mod types;

// Re-export public API
pub use types::{
    ErrorKind, InitializationError, LabelError, LabelErrorKind, LabelErrors, ParseError,
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn sample_errors() -> LabelErrors {
        LabelErrors::new(vec![
            LabelError::TooLong {
                label: "label".to_string(),
                length: 64,
            },
            LabelError::EndsWithDash("label-".to_string()),
        ])
        .unwrap()
    }

    #[test]
    fn test_label_errors_cannot_be_empty() {
        assert!(LabelErrors::new(Vec::new()).is_none());
        let errors =
            LabelErrors::new(vec![LabelError::StartsWithDash("-a".to_string())]).unwrap();
        assert_eq!(errors.len(), 1);
        assert!(!errors.is_empty());
        assert_eq!(errors.first().kind(), LabelErrorKind::StartsWithDash);
        assert_eq!(ParseError::from(errors).kind(), ErrorKind::StartsWithDash);
    }

    #[test]
    fn test_label_errors_contains_collected_kinds() {
        let errors = sample_errors();
        assert!(errors.contains(LabelErrorKind::TooLong));
        assert!(errors.contains(LabelErrorKind::EndsWithDash));
        assert!(!errors.contains(LabelErrorKind::LastLabelNumeric));
        assert!(!errors.contains(ErrorKind::Unmanaged));
    }

    #[test]
    fn test_label_errors_display() {
        assert_eq!(
            sample_errors().to_string(),
            "Label error(s):\n\t- label is too long. Maximum length is 63, got \"label\" (length 64)\n\t- labels cannot end with a dash (\"label-\")"
        );
    }

    #[test]
    fn test_parse_error_contains_through_aggregate() {
        let err = ParseError::from(sample_errors());
        assert!(err.contains(LabelErrorKind::TooLong));
        assert!(err.contains(ErrorKind::EndsWithDash));
        assert!(!err.contains(ErrorKind::ReservedDomain));
        assert_eq!(err.kind(), ErrorKind::TooLong);
        assert_eq!(err.kinds(), vec![ErrorKind::TooLong, ErrorKind::EndsWithDash]);
    }

    #[test]
    fn test_parse_error_top_level_kinds() {
        let reserved = ParseError::ReservedDomain("localhost".to_string());
        assert!(reserved.contains(ErrorKind::ReservedDomain));
        assert!(!reserved.contains(LabelErrorKind::TooLong));
        assert!(reserved.label_errors().is_none());

        let unmanaged = ParseError::Unmanaged("cromulent".to_string());
        assert_eq!(unmanaged.kinds(), vec![ErrorKind::Unmanaged]);
    }

    #[test]
    fn test_parse_error_messages() {
        assert_eq!(
            ParseError::ReservedDomain(String::new()).to_string(),
            "domain is reserved: \"\""
        );
        assert_eq!(
            ParseError::DomainTooLong {
                hostname: "a".repeat(254),
                length: 254
            }
            .to_string(),
            format!(
                "domain is too long. Maximum length is 253, got \"{}\" (length 254)",
                "a".repeat(254)
            )
        );
        assert_eq!(
            ParseError::Unmanaged("cromulent".to_string()).to_string(),
            "unmanaged hostname: \"cromulent\""
        );
    }

    #[test]
    fn test_label_error_kinds_map_into_error_kinds() {
        // Every label kind has a distinct top-level counterpart
        let mapped: Vec<ErrorKind> = LabelErrorKind::iter().map(ErrorKind::from).collect();
        for (i, a) in mapped.iter().enumerate() {
            for b in &mapped[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(mapped.len(), 6);
    }

    #[test]
    fn test_error_kind_display_is_non_empty() {
        for kind in ErrorKind::iter() {
            assert!(!kind.to_string().is_empty());
        }
    }

    #[test]
    fn test_label_error_label_accessor() {
        let err = LabelError::TooShort {
            label: String::new(),
            length: 0,
        };
        assert_eq!(err.label(), "");
        assert_eq!(err.kind(), LabelErrorKind::TooShort);
    }
}
