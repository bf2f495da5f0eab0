//! Lexer token types

use serde::{Deserialize, Serialize};

use crate::fields::FieldValueType;

/// Byte-offset span into the original query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Comparison operator attached to a filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    #[default]
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Equal => "=",
            FilterOperator::NotEqual => "!=",
            FilterOperator::GreaterThan => ">",
            FilterOperator::GreaterThanOrEqual => ">=",
            FilterOperator::LessThan => "<",
            FilterOperator::LessThanOrEqual => "<=",
        }
    }
}

/// The value portion of a filter: a scalar or a bracketed `[a,b,c]` list.
///
/// Scalar values are stored unescaped (quotes stripped, `\"` collapsed);
/// the surrounding [`Token::raw`] keeps the original text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterValue {
    Single(String),
    List(Vec<String>),
}

impl FilterValue {
    /// The scalar text, if this is not a list value.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            FilterValue::Single(v) => Some(v),
            FilterValue::List(_) => None,
        }
    }
}

/// A `key:value` term, carried by [`TokenKind::Filter`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterToken {
    /// Field name, unescaped.
    pub key: String,
    /// True when the key was prefixed with `!`.
    pub negated: bool,
    /// Defaults to `=` when no operator follows the colon.
    pub operator: FilterOperator,
    /// Raw value text, still unvalidated at this stage.
    pub value: FilterValue,
    /// Resolved against the field table at scan time; `String` for
    /// unknown keys.
    pub value_type: FieldValueType,
}

/// Token kinds produced by the scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    FreeText,
    Filter(FilterToken),
    LogicalAnd,
    LogicalOr,
    OpenParen,
    CloseParen,
}

/// A token with the exact substring it covers.
///
/// Inter-token whitespace is attached to the front of the token that
/// follows it (trailing whitespace at end of input extends the last
/// token), so concatenating `raw` fields in order reproduces the query
/// byte-for-byte. Whitespace is never emitted as its own token, except
/// that an all-whitespace query yields a single `FreeText` token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub raw: String,
    pub span: Span,
}

impl Token {
    /// The filter payload, when this token is a filter.
    pub fn filter(&self) -> Option<&FilterToken> {
        match &self.kind {
            TokenKind::Filter(filter) => Some(filter),
            _ => None,
        }
    }

    pub fn is_free_text(&self) -> bool {
        matches!(self.kind, TokenKind::FreeText)
    }

    /// Raw text with the attached boundary whitespace stripped.
    pub fn trimmed(&self) -> &str {
        self.raw.trim()
    }
}
