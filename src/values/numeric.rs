//! Numeric filter-value validation

use once_cell::sync::Lazy;
use regex::Regex;

/// `12`, `-3.5`, `12k` / `12m` / `12b` multiplier suffixes.
static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^-?\d+(\.\d+)?[kmb]?$").expect("valid number regex"));

/// Same as [`NUMBER_RE`] without the decimal point.
static INTEGER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^-?\d+[kmb]?$").expect("valid integer regex"));

/// Validate a `NUMBER` filter value. Valid values are already canonical.
pub fn clean_number(value: &str) -> Option<String> {
    NUMBER_RE.is_match(value).then(|| value.to_string())
}

/// Validate an `INTEGER` filter value.
pub fn clean_integer(value: &str) -> Option<String> {
    INTEGER_RE.is_match(value).then(|| value.to_string())
}

/// `12`, `-3.5`; no suffix, no exponent or non-finite forms.
static BARE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("valid bare number regex"));

/// Whether the text is a bare number (no multiplier suffix). Used by the
/// suggestion generators to decide if the typed prefix can be expanded;
/// the shape matches what the typed cleaners accept, so every expansion
/// of a bare number survives cleaning.
pub fn is_bare_number(value: &str) -> bool {
    BARE_NUMBER_RE.is_match(value)
}

/// As [`is_bare_number`], without the decimal point.
pub fn is_bare_integer(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_accepts_suffixes() {
        assert_eq!(clean_number("12k"), Some("12k".to_string()));
        assert_eq!(clean_number("12K"), Some("12K".to_string()));
        assert_eq!(clean_number("-3.5m"), Some("-3.5m".to_string()));
        assert_eq!(clean_number("0"), Some("0".to_string()));
    }

    #[test]
    fn test_number_rejects_garbage() {
        assert_eq!(clean_number(""), None);
        assert_eq!(clean_number("12kk"), None);
        assert_eq!(clean_number("1.2.3"), None);
        assert_eq!(clean_number("k12"), None);
    }

    #[test]
    fn test_integer_rejects_decimals() {
        assert_eq!(clean_integer("12"), Some("12".to_string()));
        assert_eq!(clean_integer("12b"), Some("12b".to_string()));
        assert_eq!(clean_integer("12.5"), None);
    }

    #[test]
    fn test_bare_number() {
        assert!(is_bare_number("12"));
        assert!(is_bare_number("-3.5"));
        assert!(!is_bare_number("12k"));
        assert!(!is_bare_number(""));
    }

    #[test]
    fn test_bare_number_rejects_float_syntax_the_cleaners_reject() {
        assert!(!is_bare_number("1e5"));
        assert!(!is_bare_number("inf"));
        assert!(!is_bare_number("NaN"));
        assert!(!is_bare_number("12."));
    }

    #[test]
    fn test_bare_integer() {
        assert!(is_bare_integer("12"));
        assert!(is_bare_integer("-12"));
        assert!(!is_bare_integer("-3.5"));
        assert!(!is_bare_integer("12k"));
        assert!(!is_bare_integer("-"));
        assert!(!is_bare_integer(""));
    }
}
