//! Filter-value normalization
//!
//! One cleaner per declared field type, dispatched through
//! [`clean_filter_value`]. Each cleaner is an independent pure function;
//! type-specific cleaning always takes precedence over generic tag-value
//! escaping, which is the fallback only when no declared type exists.

pub mod boolean;
pub mod date;
pub mod duration;
pub mod numeric;
pub mod percentage;
pub mod size;

use crate::fields::FieldValueType;
use crate::lexer::FilterToken;

/// Normalize a raw filter value against its declared type.
///
/// Returns `None` when the value cannot be recovered for the declared
/// type; the caller decides whether to reject the filter, mark it
/// invalid, or keep it as a raw string. Every non-`None` result is
/// idempotent: cleaning it again yields the same string.
pub fn clean_filter_value(
    value: &str,
    value_type: Option<FieldValueType>,
    token: Option<&FilterToken>,
) -> Option<String> {
    match value_type {
        Some(FieldValueType::Number) => numeric::clean_number(value),
        Some(FieldValueType::Integer) => numeric::clean_integer(value),
        Some(FieldValueType::Duration) => duration::clean_duration(value),
        Some(FieldValueType::Size) => size::clean_size(value),
        Some(FieldValueType::Percentage) => Some(percentage::clean_percentage(value)),
        Some(FieldValueType::Boolean) => Some(boolean::clean_boolean(value)),
        Some(FieldValueType::Date) => date::clean_date(value, token),
        Some(FieldValueType::String) => Some(escape_tag_value(value)),
        None => Some(escape_tag_value(value.trim())),
    }
}

/// Quote-wrap a tag value whose text would collide with the query grammar
/// (whitespace, quotes, or colons), escaping embedded quotes and
/// backslashes. Already-quoted values are left alone so escaping stays
/// idempotent.
pub fn escape_tag_value(value: &str) -> String {
    if is_quoted(value) {
        return value.to_string();
    }
    if value.contains(|c: char| c.is_whitespace() || c == '"' || c == ':') {
        format!(
            "\"{}\"",
            value.replace('\\', "\\\\").replace('"', "\\\"")
        )
    } else {
        value.to_string()
    }
}

fn is_quoted(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('"') && value.ends_with('"')
}

// ============================================================================
// TESTS
// ============================================================================
