//! Per-condition quoting policy.
//!
//! A value stays unquoted when it is a function call, when the operator is a
//! range comparison, when the column is a known date field, or when the value
//! is a boolean. Everything else is wrapped in single quotes with embedded
//! quotes doubled; `LIKE` values additionally get `%` wildcards on both sides.

use super::fragment::Placeholder;
use super::reassemble::ProtectedSpans;
use super::tokenizer::{Token, TokenKind};
use crate::types::CleanOptions;

const RANGE_OPERATORS: &[&str] = &[">", "<", ">=", "<="];

/// A single `column operator value` condition.
#[derive(Debug, Clone)]
pub struct Condition<'a> {
    pub column: String,
    pub operator: &'a str,
    pub value_tokens: &'a [Token],
}

impl Condition<'_> {
    fn is_like(&self) -> bool {
        self.operator.eq_ignore_ascii_case("LIKE")
    }

    fn is_range(&self) -> bool {
        RANGE_OPERATORS.contains(&self.operator)
    }

    fn value_is_function(&self) -> bool {
        matches!(self.value_tokens, [token] if token.kind == TokenKind::Function)
    }

    fn literal_value(&self) -> Option<usize> {
        match self.value_tokens {
            [Token {
                kind: TokenKind::Placeholder(Placeholder::Literal(index)),
                ..
            }] => Some(*index),
            _ => None,
        }
    }
}

/// Returns true if the condition's value must be SQL-quoted.
pub fn needs_quotes(condition: &Condition<'_>, raw_value: &str, options: &CleanOptions) -> bool {
    if condition.value_is_function() || condition.is_range() {
        return false;
    }
    if options.is_date_field(&condition.column) {
        return false;
    }
    let lowered = raw_value.to_lowercase();
    lowered != "true" && lowered != "false"
}

/// Rebuilds a condition as `<column> <OPERATOR> <value>`.
pub fn rebuild_condition(
    condition: &Condition<'_>,
    spans: &ProtectedSpans<'_>,
    options: &CleanOptions,
) -> String {
    let operator = condition.operator.to_uppercase();
    let raw_value = spans.render_tokens(condition.value_tokens);

    let value = if needs_quotes(condition, &raw_value, options) {
        let inner = match condition.literal_value() {
            Some(index) => spans
                .literal(index)
                .trim_matches(|c| c == '%' || c == '\'' || c == '"')
                .to_string(),
            None => bare_value(condition.value_tokens, spans)
                .trim_matches('%')
                .to_string(),
        };
        quote_value(&inner, condition.is_like())
    } else {
        raw_value
    };

    if value.is_empty() {
        format!("{} {}", condition.column, operator)
    } else {
        format!("{} {} {}", condition.column, operator, value)
    }
}

/// Value text with literals inlined without their quotes, so a mixed value
/// such as `'Acme' Corp` is quoted once as a whole.
fn bare_value(tokens: &[Token], spans: &ProtectedSpans<'_>) -> String {
    tokens
        .iter()
        .map(|token| match token.kind {
            TokenKind::Placeholder(Placeholder::Literal(index)) => spans.literal(index).to_string(),
            _ => spans.render_token(token).into_owned(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Doubles embedded single quotes and wraps the value.
pub fn quote_value(value: &str, like: bool) -> String {
    let escaped = value.replace('\'', "''");
    if like {
        format!("'%{escaped}%'")
    } else {
        format!("'{escaped}'")
    }
}
