//! Groups a token stream into conditions joined by logical operators.

use super::quoting::{rebuild_condition, Condition};
use super::reassemble::ProtectedSpans;
use super::tokenizer::{Token, TokenKind};
use crate::types::CleanOptions;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            _ => None,
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => f.write_str("AND"),
            Self::Or => f.write_str("OR"),
        }
    }
}

/// One element of a rebuilt clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClausePart {
    /// A finished condition (or a parenthesized sub-clause).
    Condition(String),
    Logical(LogicalOperator),
}

impl fmt::Display for ClausePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Condition(text) => f.write_str(text),
            Self::Logical(op) => op.fmt(f),
        }
    }
}

/// Splits `tokens` into conditions at genuine `AND`/`OR` boundaries.
///
/// A logical keyword only separates conditions when the tokens collected so
/// far form a left-hand side (column and operator, or a lone sub-clause) and
/// the next tokens start a new condition (a word followed by an operator, or
/// a sub-clause). Otherwise the keyword is kept as part of the current value.
pub fn group_conditions(
    tokens: &[Token],
    spans: &ProtectedSpans<'_>,
    options: &CleanOptions,
) -> Vec<ClausePart> {
    let mut parts = Vec::new();
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        let Some(op) = token.logical_keyword().and_then(LogicalOperator::from_keyword) else {
            continue;
        };
        let current = &tokens[start..i];
        if has_left_hand_side(current) && starts_condition(&tokens[i + 1..]) {
            parts.push(ClausePart::Condition(build_condition(current, spans, options)));
            parts.push(ClausePart::Logical(op));
            start = i + 1;
        }
    }

    if start < tokens.len() {
        parts.push(ClausePart::Condition(build_condition(
            &tokens[start..],
            spans,
            options,
        )));
    }

    parts
}

fn has_left_hand_side(current: &[Token]) -> bool {
    match current {
        [only] => only.is_subclause(),
        _ => current.len() >= 2,
    }
}

fn starts_condition(rest: &[Token]) -> bool {
    match rest {
        [first, second, ..] if first.is_word() && second.is_operator() => true,
        [first, ..] => first.is_subclause(),
        [] => false,
    }
}

fn build_condition(tokens: &[Token], spans: &ProtectedSpans<'_>, options: &CleanOptions) -> String {
    match tokens {
        // A sub-clause is the whole condition; anything after it is dropped.
        [first, ..] if first.is_subclause() => spans.render_token(first).into_owned(),
        [column, operator, value @ ..] if operator.kind == TokenKind::Operator => {
            let condition = Condition {
                column: spans.render_token(column).into_owned(),
                operator: &operator.text,
                value_tokens: value,
            };
            rebuild_condition(&condition, spans, options)
        }
        _ => spans.render_tokens(tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::fragment::{ProtectedLiteral, ProtectedSubclause, Segment};
    use crate::clause::reassemble::join_parts;
    use crate::clause::tokenizer::tokenize;

    fn group(segments: &[Segment], subclauses: &[ProtectedSubclause]) -> String {
        let literals = vec![ProtectedLiteral {
            index: 0,
            original_text: "EMEA".to_string(),
        }];
        let spans = ProtectedSpans::new(&literals, subclauses);
        let tokens = tokenize(segments);
        join_parts(&group_conditions(&tokens, &spans, &CleanOptions::default()))
    }

    fn text(s: &str) -> Segment {
        Segment::Text(s.to_string())
    }

    #[test]
    fn splits_on_real_separators() {
        assert_eq!(
            group(&[text("Status = Open and Priority = High")], &[]),
            "Status = 'Open' AND Priority = 'High'"
        );
    }

    #[test]
    fn keeps_keyword_inside_unquoted_value() {
        assert_eq!(
            group(&[text("Name = Johnson and Johnson")], &[]),
            "Name = 'Johnson and Johnson'"
        );
    }

    #[test]
    fn keyword_followed_by_value_word_is_not_a_separator() {
        assert_eq!(
            group(&[text("Name = Salt OR Pepper AND Amount > 5")], &[]),
            "Name = 'Salt OR Pepper' AND Amount > 5"
        );
    }

    #[test]
    fn subclause_on_either_side() {
        let subclauses = vec![ProtectedSubclause {
            index: 0,
            cleaned_text: "Amount > 100 OR Amount < 10".to_string(),
        }];
        assert_eq!(
            group(
                &[Segment::Subclause(0), text(" AND Region = "), Segment::Literal(0)],
                &subclauses
            ),
            "(Amount > 100 OR Amount < 10) AND Region = 'EMEA'"
        );
        assert_eq!(
            group(&[text("Region = EMEA OR "), Segment::Subclause(0)], &subclauses),
            "Region = 'EMEA' OR (Amount > 100 OR Amount < 10)"
        );
    }

    #[test]
    fn malformed_condition_falls_back_to_verbatim() {
        let subclauses = vec![ProtectedSubclause {
            index: 0,
            cleaned_text: "SELECT Id FROM Contact".to_string(),
        }];
        assert_eq!(
            group(&[text("Id IN "), Segment::Subclause(0)], &subclauses),
            "Id IN (SELECT Id FROM Contact)"
        );
    }

    #[test]
    fn function_call_after_keyword_does_not_start_a_condition() {
        let tokens = tokenize(&[
            text("A = 1 AND "),
            Segment::Call("DAY_ONLY(CreatedDate)".to_string()),
            text(" = TODAY"),
        ]);
        let spans = ProtectedSpans::new(&[], &[]);
        assert_eq!(
            join_parts(&group_conditions(&tokens, &spans, &CleanOptions::default())),
            "A = '1 AND DAY_ONLY(CreatedDate) = TODAY'"
        );
    }

    #[test]
    fn leading_keyword_stays_with_its_condition() {
        assert_eq!(group(&[text("AND Name = x")], &[]), "AND Name = x");
    }

    #[test]
    fn empty_stream_produces_no_parts() {
        let spans = ProtectedSpans::new(&[], &[]);
        assert!(group_conditions(&[], &spans, &CleanOptions::default()).is_empty());
    }
}
