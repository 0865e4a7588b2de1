//! Fuzz target for the clause cleaner.
//!
//! This tests that `clean()` doesn't panic on arbitrary clauses and columns.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wherefix_core::{clean, CleanOptions, CleanRequest};

/// Structured input for fuzzing - lets the fuzzer vary options and columns too.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    clause: String,
    columns: Option<Vec<String>>,
    date_fields: Option<Vec<String>>,
}

fuzz_target!(|input: FuzzInput| {
    let request = CleanRequest {
        clause: input.clause,
        columns: input.columns,
        options: input
            .date_fields
            .map(|date_fields| CleanOptions { date_fields }),
    };

    // Cleaning never fails; malformed input must degrade, not panic.
    let result = clean(&request);
    if result.clause.is_empty() {
        assert!(result.where_clause.is_empty());
    }
});
