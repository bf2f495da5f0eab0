//! Filter-value suggestion generation
//!
//! One suggestion strategy per field value type, dispatched through
//! [`value_suggestions`]. This is a closed dispatch table: adding a new
//! field type means adding a new arm, since the set of supported filter
//! types is fixed by the product's field schema.

use serde::{Deserialize, Serialize};

use crate::fields::FieldValueType;
use crate::lexer::FilterToken;
use crate::values::date::{stored_sign, RELATIVE_UNITS};
use crate::values::duration::DurationUnit;
use crate::values::numeric::{is_bare_integer, is_bare_number};
use crate::values::size::SizeUnit;

/// A single completion candidate for a filter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub value: String,
    pub description: Option<String>,
}

impl Suggestion {
    fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: None,
        }
    }

    fn described(value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: Some(description.into()),
        }
    }
}

/// A labeled group of suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionSection {
    pub label: String,
    pub suggestions: Vec<Suggestion>,
}

impl SuggestionSection {
    fn new(label: impl Into<String>, suggestions: Vec<Suggestion>) -> Self {
        Self {
            label: label.into(),
            suggestions,
        }
    }
}

/// Generate completion sections for an in-progress filter value.
///
/// Returns `None` when no suggestion strategy exists for the type (the
/// default branch). `Percentage` returns `Some` with an empty list: a
/// deliberate "no suggestions, but do not fall through to default"
/// marker, kept distinct from `None` on purpose.
pub fn value_suggestions(
    filter_value: &str,
    value_type: FieldValueType,
    token: Option<&FilterToken>,
) -> Option<Vec<SuggestionSection>> {
    let typed = filter_value.trim();
    match value_type {
        FieldValueType::Number => Some(numeric_suggestions(typed, is_bare_number)),
        FieldValueType::Integer => Some(numeric_suggestions(typed, is_bare_integer)),
        FieldValueType::Duration => Some(duration_suggestions(typed)),
        FieldValueType::Size => Some(size_suggestions(typed)),
        FieldValueType::Date => Some(relative_date_suggestions(typed, token)),
        FieldValueType::Boolean => Some(boolean_suggestions(typed)),
        FieldValueType::Percentage => Some(Vec::new()),
        FieldValueType::String => None,
    }
}

/// Multiplier expansions of a typed numeric prefix (`12` → `12k`, ...).
/// The gate matches the cleaner for the field type, so integer fields do
/// not get decimal expansions their cleaner would reject.
fn numeric_suggestions(typed: &str, is_expandable: fn(&str) -> bool) -> Vec<SuggestionSection> {
    if !is_expandable(typed) {
        return Vec::new();
    }
    let suggestions = vec![
        Suggestion::plain(typed),
        Suggestion::described(format!("{typed}k"), "thousand"),
        Suggestion::described(format!("{typed}m"), "million"),
        Suggestion::described(format!("{typed}b"), "billion"),
    ];
    vec![SuggestionSection::new("multipliers", suggestions)]
}

fn duration_suggestions(typed: &str) -> Vec<SuggestionSection> {
    let suggestions = if is_bare_number(typed) {
        DurationUnit::ALL
            .into_iter()
            .map(|unit| Suggestion::described(format!("{typed}{}", unit.suffix()), unit.label()))
            .collect()
    } else {
        ["100ms", "500ms", "1s", "5s", "1m", "5m", "1h", "1d"]
            .into_iter()
            .map(Suggestion::plain)
            .collect()
    };
    vec![SuggestionSection::new("durations", suggestions)]
}

fn size_suggestions(typed: &str) -> Vec<SuggestionSection> {
    let suggestions = if is_bare_number(typed) {
        SizeUnit::ALL
            .into_iter()
            .map(|unit| Suggestion::described(format!("{typed}{}", unit.suffix()), unit.label()))
            .collect()
    } else {
        ["1kb", "10kb", "1mb", "10mb", "1gb"]
            .into_iter()
            .map(Suggestion::plain)
            .collect()
    };
    vec![SuggestionSection::new("sizes", suggestions)]
}

/// Relative-date completions. A typed number expands over the relative
/// units with the sign inherited from the token (default `-`, "ago").
fn relative_date_suggestions(typed: &str, token: Option<&FilterToken>) -> Vec<SuggestionSection> {
    // A sign typed by the user wins over the one stored on the token.
    let sign = typed
        .chars()
        .next()
        .filter(|c| *c == '+' || *c == '-')
        .or_else(|| token.and_then(stored_sign))
        .unwrap_or('-');
    let digits = typed.trim_start_matches(['+', '-']);

    let suggestions = if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        RELATIVE_UNITS
            .into_iter()
            .map(|(suffix, label)| {
                Suggestion::described(format!("{sign}{digits}{suffix}"), label)
            })
            .collect()
    } else {
        [
            ("-1h", "last hour"),
            ("-24h", "last 24 hours"),
            ("-7d", "last 7 days"),
            ("-14d", "last 14 days"),
            ("-30d", "last 30 days"),
        ]
        .into_iter()
        .map(|(value, label)| Suggestion::described(value, label))
        .collect()
    };
    vec![SuggestionSection::new("relative dates", suggestions)]
}

/// `true`/`false`, prefix-filtered by what has been typed so far.
fn boolean_suggestions(typed: &str) -> Vec<SuggestionSection> {
    let typed_lower = typed.to_ascii_lowercase();
    let mut suggestions: Vec<Suggestion> = crate::values::boolean::DEFAULT_BOOLEAN_VALUES
        .into_iter()
        .filter(|value| value.starts_with(&typed_lower))
        .map(Suggestion::plain)
        .collect();
    if suggestions.is_empty() {
        suggestions = crate::values::boolean::DEFAULT_BOOLEAN_VALUES
            .into_iter()
            .map(Suggestion::plain)
            .collect();
    }
    vec![SuggestionSection::new("booleans", suggestions)]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn values(sections: &[SuggestionSection]) -> Vec<&str> {
        sections
            .iter()
            .flat_map(|s| s.suggestions.iter().map(|s| s.value.as_str()))
            .collect()
    }

    #[test]
    fn test_numeric_multipliers() {
        let sections =
            value_suggestions("12", FieldValueType::Number, None).expect("numeric strategy");
        assert_eq!(values(&sections), vec!["12", "12k", "12m", "12b"]);
    }

    #[test]
    fn test_integer_decimal_prefix_suggests_nothing() {
        let sections =
            value_suggestions("-3.5", FieldValueType::Integer, None).expect("numeric strategy");
        assert!(sections.is_empty());

        // The same prefix is expandable for a plain number field.
        let sections =
            value_suggestions("-3.5", FieldValueType::Number, None).expect("numeric strategy");
        assert!(!sections.is_empty());
    }

    #[test]
    fn test_numeric_non_number_suggests_nothing() {
        let sections =
            value_suggestions("abc", FieldValueType::Integer, None).expect("numeric strategy");
        assert!(sections.is_empty());
    }

    #[test]
    fn test_duration_units_for_typed_number() {
        let sections =
            value_suggestions("5", FieldValueType::Duration, None).expect("duration strategy");
        assert_eq!(
            values(&sections),
            vec!["5ms", "5s", "5m", "5h", "5d", "5w"]
        );
    }

    #[test]
    fn test_duration_defaults_when_empty() {
        let sections =
            value_suggestions("", FieldValueType::Duration, None).expect("duration strategy");
        assert!(values(&sections).contains(&"500ms"));
    }

    #[test]
    fn test_size_units_for_typed_number() {
        let sections = value_suggestions("4", FieldValueType::Size, None).expect("size strategy");
        assert!(values(&sections).contains(&"4mb"));
    }

    #[test]
    fn test_relative_date_defaults() {
        let sections = value_suggestions("", FieldValueType::Date, None).expect("date strategy");
        assert_eq!(
            values(&sections),
            vec!["-1h", "-24h", "-7d", "-14d", "-30d"]
        );
    }

    #[test]
    fn test_relative_date_typed_number() {
        let sections = value_suggestions("3", FieldValueType::Date, None).expect("date strategy");
        assert_eq!(values(&sections), vec!["-3m", "-3h", "-3d", "-3w"]);
    }

    #[test]
    fn test_boolean_prefix_filter() {
        let sections = value_suggestions("t", FieldValueType::Boolean, None).expect("bool strategy");
        assert_eq!(values(&sections), vec!["true"]);

        let sections = value_suggestions("x", FieldValueType::Boolean, None).expect("bool strategy");
        assert_eq!(values(&sections), vec!["true", "false"]);
    }

    #[test]
    fn test_percentage_is_empty_not_none() {
        // Deliberately distinct from the default branch: "no suggestions
        // UI" rather than "no strategy exists".
        assert_eq!(
            value_suggestions("50", FieldValueType::Percentage, None),
            Some(Vec::new())
        );
    }

    #[test]
    fn test_generated_suggestions_survive_cleaning() {
        use crate::values::clean_filter_value;

        let typed_inputs = ["", "12", "-3.5", "1e5", "inf", "NaN", "abc"];
        let types = [
            FieldValueType::Number,
            FieldValueType::Integer,
            FieldValueType::Duration,
            FieldValueType::Size,
            FieldValueType::Date,
            FieldValueType::Boolean,
        ];
        for typed in typed_inputs {
            for value_type in types {
                let sections =
                    value_suggestions(typed, value_type, None).expect("strategy exists");
                for suggestion in sections.iter().flat_map(|s| &s.suggestions) {
                    assert!(
                        clean_filter_value(&suggestion.value, Some(value_type), None).is_some(),
                        "suggested {:?} for typed {:?} but the {:?} cleaner rejects it",
                        suggestion.value,
                        typed,
                        value_type
                    );
                }
            }
        }
    }

    #[test]
    fn test_string_has_no_strategy() {
        assert_eq!(value_suggestions("foo", FieldValueType::String, None), None);
    }
}
