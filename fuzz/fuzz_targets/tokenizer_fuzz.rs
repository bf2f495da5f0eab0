//! Fuzz test for the search query tokenizer
//!
//! This fuzz target tests the tokenizer with arbitrary byte sequences to find:
//! - Panics or crashes
//! - Infinite loops
//! - Round-trip violations
//!
//! Run with: cargo +nightly fuzz run tokenizer_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use search_syntax::{tokenize, FieldTable};

fuzz_target!(|data: &[u8]| {
    // Try to interpret the bytes as UTF-8
    // The tokenizer should handle any valid UTF-8 string without panicking
    if let Ok(input) = std::str::from_utf8(data) {
        let fields = FieldTable::builtin();

        // Tokenize should never panic, even with malformed input
        let tokens = tokenize(input, &fields);

        // Invariants that should always hold:
        // 1. Concatenating raw fields reproduces the input exactly
        let rebuilt: String = tokens.iter().map(|t| t.raw.as_str()).collect();
        assert_eq!(rebuilt, input, "token raws must round-trip the input");

        // 2. Spans are contiguous and cover the whole input
        let mut expected_start = 0usize;
        for token in &tokens {
            assert_eq!(token.span.start, expected_start, "spans must be contiguous");
            assert!(token.span.end > token.span.start, "tokens must be non-empty");
            expected_start = token.span.end;
        }
        assert_eq!(expected_start, input.len(), "spans must cover the input");
    }
});
