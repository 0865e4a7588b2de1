//! Filter clause normalization.
//!
//! # Pipeline
//!
//! ```text
//! raw clause → [limit] → [literals] → [structure] → [tokenizer] → [grouper] → [quoting] → [reassemble]
//! ```
//!
//! The `LIMIT` suffix is detached first and quoted literals are lifted out so
//! no later stage re-reads their contents. Each fragment is then split at a
//! `WHERE` keyword and stripped of parenthesized groups (cleaned recursively),
//! tokenized, grouped into conditions and re-quoted. Nothing here fails: input
//! that matches no known shape is reproduced as-is.
//!
//! # Example
//!
//! ```
//! use wherefix_core::{clean_where_clause, format_where_input_string};
//!
//! assert_eq!(
//!     clean_where_clause("Status = 'Open' AND Priority = High"),
//!     "Status = 'Open' AND Priority = 'High'"
//! );
//! assert_eq!(format_where_input_string("Name LIKE Acme"), "WHERE Name LIKE '%Acme%'");
//! assert_eq!(format_where_input_string("   "), "");
//! ```

mod fragment;
mod grouper;
mod limit;
mod literals;
mod quoting;
mod reassemble;
mod structure;
mod tokenizer;

pub use fragment::{Placeholder, ProtectedLiteral, ProtectedSubclause, Segment};
pub use grouper::{ClausePart, LogicalOperator};
pub use limit::{extract_limit, LimitSuffix};
pub use literals::protect_literals;
pub use structure::MAX_NESTING_DEPTH;
pub use tokenizer::{tokenize, Token, TokenKind};

use crate::types::CleanOptions;
use regex::Regex;
use std::sync::OnceLock;
#[cfg(feature = "tracing")]
use tracing::debug;

/// Outcome of one normalization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Normalized {
    /// Cleaned clause, `LIMIT` suffix included.
    pub text: String,
    pub limit: Option<LimitSuffix>,
    pub stray_quote: bool,
    pub unbalanced_parens: bool,
    pub deep_nesting: bool,
}

fn leading_where_regex() -> &'static Regex {
    static LEADING_WHERE_REGEX: OnceLock<Regex> = OnceLock::new();
    LEADING_WHERE_REGEX
        .get_or_init(|| Regex::new(r"(?i)^WHERE\b\s*").expect("Invalid regex pattern"))
}

pub(crate) fn normalize(raw: &str, options: &CleanOptions) -> Normalized {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Normalized::default();
    }

    // Callers often hand over a clause that already starts with WHERE.
    let trimmed = match leading_where_regex().find(trimmed) {
        Some(m) => &trimmed[m.end()..],
        None => trimmed,
    };

    let (body, limit) = extract_limit(trimmed);
    let (segments, literals) = protect_literals(body);
    let stray_quote = literals::has_stray_quote(&segments);

    #[cfg(feature = "tracing")]
    debug!(
        literals = literals.len(),
        has_limit = limit.is_some(),
        stray_quote,
        "protected clause literals"
    );

    let mut cleaner = structure::Cleaner::new(&literals, options);
    let cleaned = if fragment::is_blank(&segments) {
        String::new()
    } else {
        cleaner.clean(&segments)
    };

    Normalized {
        text: reassemble::attach_limit(cleaned, limit.as_ref()),
        limit,
        stray_quote,
        unbalanced_parens: cleaner.found_unbalanced_parens(),
        deep_nesting: cleaner.found_deep_nesting(),
    }
}

/// Normalizes a loosely formed filter clause into a correctly quoted one.
///
/// Returns an empty string for empty or whitespace-only input. A trailing
/// `LIMIT <n>` is preserved exactly as written.
pub fn clean_where_clause(raw: &str) -> String {
    clean_where_clause_with(raw, &CleanOptions::default())
}

/// Like [`clean_where_clause`], with caller-supplied options.
pub fn clean_where_clause_with(raw: &str, options: &CleanOptions) -> String {
    normalize(raw, options).text
}

/// Returns `WHERE <cleaned clause>`, or an empty string when nothing remains.
pub fn format_where_input_string(raw: &str) -> String {
    with_where_keyword(clean_where_clause(raw))
}

pub(crate) fn with_where_keyword(cleaned: String) -> String {
    if cleaned.is_empty() {
        cleaned
    } else {
        format!("WHERE {cleaned}")
    }
}
