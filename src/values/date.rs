//! Relative and absolute date grammar

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::lexer::{FilterToken, FilterValue};

/// `-24h`, `+7d`, bare `14d` (sign optional). Units: minutes, hours,
/// days, weeks.
static RELATIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-]?)(\d+)([mhdw])$").expect("valid relative date regex"));

/// Error produced when a value matches neither date grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized date: {0}")]
pub struct InvalidDate(pub String);

/// Relative date units accepted by the grammar, used by the suggestion
/// generator.
pub const RELATIVE_UNITS: [(&str, &str); 4] = [
    ("m", "minutes"),
    ("h", "hours"),
    ("d", "days"),
    ("w", "weeks"),
];

/// Clean a `DATE` filter value.
///
/// A relative date without an explicit sign inherits the sign from the
/// token's stored value, defaulting to `-` ("ago"). Absolute ISO-8601
/// dates pass through unchanged. Anything else is rejected.
pub fn clean_date(value: &str, token: Option<&FilterToken>) -> Option<String> {
    if let Some(caps) = RELATIVE_RE.captures(value) {
        if caps[1].is_empty() {
            let sign = token.and_then(stored_sign).unwrap_or('-');
            return Some(format!("{sign}{}{}", &caps[2], &caps[3]));
        }
        return Some(value.to_string());
    }
    if is_absolute(value) {
        return Some(value.to_string());
    }
    None
}

/// The sign carried by the token's stored value text, when there is one.
pub fn stored_sign(token: &FilterToken) -> Option<char> {
    match &token.value {
        FilterValue::Single(value) => value
            .trim()
            .chars()
            .next()
            .filter(|c| *c == '+' || *c == '-'),
        FilterValue::List(_) => None,
    }
}

fn is_absolute(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").is_ok()
        || DateTime::parse_from_rfc3339(value).is_ok()
}
