//! Search query tokenizer and filter-value normalizer.
//!
//! This crate parses the free-text query language typed into an issue-search
//! input into typed tokens (free text, `key:value` filters, boolean
//! operators, parentheses), normalizes filter values against a declared
//! field schema, and generates value completions for an in-progress filter.
//!
//! Architecture:
//! ```text
//! Query string
//!     ↓
//! Tokenizer           (Vec<Token>; raw substrings round-trip the input)
//!     ↓
//! Value normalizer    (canonical value per declared type, or rejection)
//!     ↓
//! Suggestion generator (completion sections for the active filter value)
//! ```
//!
//! Every stage is a pure function of the query string plus a read-only
//! [`FieldTable`]; nothing here performs I/O or holds mutable state.

pub mod fields;
pub mod lexer;
pub mod suggest;
pub mod values;

// Re-export key types for convenience
pub use fields::{FieldTable, FieldValueType};
pub use lexer::{tokenize, FilterOperator, FilterToken, FilterValue, Span, Token, TokenKind, Tokenizer};
pub use suggest::{value_suggestions, Suggestion, SuggestionSection};
pub use values::{clean_filter_value, escape_tag_value};
