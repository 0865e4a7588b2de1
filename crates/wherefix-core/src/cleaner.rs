//! Request-level entry point.

use crate::clause::{normalize, with_where_keyword, MAX_NESTING_DEPTH};
use crate::columns::{clean_output_columns, format_select_list};
use crate::types::{issue_codes, CleanOptions, CleanRequest, CleanResult, Issue};
#[cfg(feature = "tracing")]
use tracing::warn;

/// Cleans the clause and output columns of a request.
///
/// Never fails. Options that do not validate are reported as an
/// [`issue_codes::INVALID_OPTIONS`] error and the defaults are used instead.
/// Recursion is bounded by [`MAX_NESTING_DEPTH`], so deeply nested input
/// cannot exhaust the stack.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(len = request.clause.len())))]
pub fn clean(request: &CleanRequest) -> CleanResult {
    let mut issues = Vec::new();
    let defaults = CleanOptions::default();

    let options = match &request.options {
        Some(options) => match options.validate() {
            Ok(()) => options,
            Err(err) => {
                #[cfg(feature = "tracing")]
                warn!(%err, "ignoring invalid clean options");
                issues.push(Issue::error(
                    issue_codes::INVALID_OPTIONS,
                    format!("Invalid options, defaults used: {err}"),
                ));
                &defaults
            }
        },
        None => &defaults,
    };

    let normalized = normalize(&request.clause, options);

    if normalized.stray_quote {
        issues.push(Issue::warning(
            issue_codes::UNBALANCED_QUOTE,
            "Clause contains an unterminated quote; the text around it was not protected",
        ));
    }
    if normalized.unbalanced_parens {
        issues.push(Issue::warning(
            issue_codes::UNBALANCED_PAREN,
            "Clause contains unbalanced parentheses; they were kept as plain text",
        ));
    }

    if normalized.deep_nesting {
        issues.push(Issue::warning(
            issue_codes::NESTING_TOO_DEEP,
            format!(
                "Clause nests parentheses deeper than {MAX_NESTING_DEPTH} levels; deeper groups were kept verbatim"
            ),
        ));
    }

    let columns = request
        .columns
        .as_deref()
        .map(clean_output_columns)
        .unwrap_or_default();
    let select_list = request.columns.as_deref().and_then(format_select_list);

    CleanResult {
        where_clause: with_where_keyword(normalized.text.clone()),
        clause: normalized.text,
        limit: normalized.limit.and_then(|limit| limit.count),
        columns,
        select_list,
        issues,
    }
}
