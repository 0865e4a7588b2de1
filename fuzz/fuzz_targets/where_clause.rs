#![no_main]

use libfuzzer_sys::fuzz_target;
use wherefix_core::{clean_where_clause, format_where_input_string};

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let cleaned = clean_where_clause(raw);
        let formatted = format_where_input_string(raw);

        if cleaned.is_empty() {
            assert!(formatted.is_empty());
        } else {
            assert_eq!(formatted, format!("WHERE {cleaned}"));
        }
    }
});
