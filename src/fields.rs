//! Field schema lookup

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Declared semantic type of a filterable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValueType {
    Number,
    Integer,
    Duration,
    Size,
    Percentage,
    Boolean,
    Date,
    #[default]
    String,
}

/// Static mapping from field name to [`FieldValueType`].
///
/// Supplied by the host application; the parser treats it as an opaque
/// read-only dependency. Keys missing from the table resolve to
/// [`FieldValueType::String`].
#[derive(Debug, Clone, Default)]
pub struct FieldTable {
    fields: HashMap<String, FieldValueType>,
}

impl FieldTable {
    /// Create an empty table (every key resolves to `String`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder-style.
    pub fn with_field(mut self, name: impl Into<String>, value_type: FieldValueType) -> Self {
        self.fields.insert(name.into(), value_type);
        self
    }

    /// Resolve a filter key to its declared type, defaulting to `String`.
    pub fn resolve(&self, key: &str) -> FieldValueType {
        self.fields.get(key).copied().unwrap_or_default()
    }

    /// Whether the key has an explicit entry in the table.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// A table with the common issue-search fields, used by the trace
    /// binary, benches, and tests.
    pub fn builtin() -> Self {
        Self::new()
            .with_field("transaction.duration", FieldValueType::Duration)
            .with_field("measurements.app_start_cold", FieldValueType::Duration)
            .with_field("spans.db", FieldValueType::Duration)
            .with_field("http.response_content_length", FieldValueType::Size)
            .with_field("stack.in_app_frames", FieldValueType::Integer)
            .with_field("times_seen", FieldValueType::Integer)
            .with_field("apdex", FieldValueType::Number)
            .with_field("failure_rate", FieldValueType::Percentage)
            .with_field("error.handled", FieldValueType::Boolean)
            .with_field("error.unhandled", FieldValueType::Boolean)
            .with_field("timestamp", FieldValueType::Date)
            .with_field("first_seen", FieldValueType::Date)
            .with_field("last_seen", FieldValueType::Date)
    }
}
