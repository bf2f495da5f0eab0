//! Fuzz test for the filter-value cleaners
//!
//! This fuzz target tests value normalization with arbitrary byte
//! sequences to find:
//! - Panics or crashes
//! - Idempotence violations
//!
//! Run with: cargo +nightly fuzz run cleaner_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use search_syntax::{clean_filter_value, FieldValueType};

const TYPES: [Option<FieldValueType>; 9] = [
    None,
    Some(FieldValueType::Number),
    Some(FieldValueType::Integer),
    Some(FieldValueType::Duration),
    Some(FieldValueType::Size),
    Some(FieldValueType::Percentage),
    Some(FieldValueType::Boolean),
    Some(FieldValueType::Date),
    Some(FieldValueType::String),
];

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = std::str::from_utf8(data) {
        for value_type in TYPES {
            // Cleaning should never panic, and every accepted value
            // must be a fixed point of its own cleaner.
            if let Some(cleaned) = clean_filter_value(value, value_type, None) {
                assert_eq!(
                    clean_filter_value(&cleaned, value_type, None).as_deref(),
                    Some(cleaned.as_str()),
                    "cleaning must be idempotent for {value_type:?}"
                );
            }
        }
    }
});
