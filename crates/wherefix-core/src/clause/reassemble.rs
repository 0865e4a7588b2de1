//! Final assembly: placeholder restoration, part joining and `LIMIT` reattachment.

use super::fragment::{Placeholder, ProtectedLiteral, ProtectedSubclause};
use super::grouper::ClausePart;
use super::limit::LimitSuffix;
use super::tokenizer::{Token, TokenKind};
use std::borrow::Cow;

/// Lookup of the spans lifted out of a fragment at one recursion level.
#[derive(Debug, Clone, Copy)]
pub struct ProtectedSpans<'a> {
    pub literals: &'a [ProtectedLiteral],
    pub subclauses: &'a [ProtectedSubclause],
}

impl<'a> ProtectedSpans<'a> {
    pub fn new(literals: &'a [ProtectedLiteral], subclauses: &'a [ProtectedSubclause]) -> Self {
        Self {
            literals,
            subclauses,
        }
    }

    /// Original literal content, quotes stripped.
    pub fn literal(&self, index: usize) -> &'a str {
        self.literals
            .get(index)
            .map(|literal| literal.original_text.as_str())
            .unwrap_or_default()
    }

    /// Cleaned sub-clause text, without its parentheses.
    pub fn subclause(&self, index: usize) -> &'a str {
        self.subclauses
            .get(index)
            .map(|subclause| subclause.cleaned_text.as_str())
            .unwrap_or_default()
    }

    /// Restores a placeholder to clause text: `'<original>'` or `(<cleaned>)`.
    pub fn restore(&self, placeholder: Placeholder) -> String {
        match placeholder {
            Placeholder::Literal(index) => format!("'{}'", self.literal(index)),
            Placeholder::Subclause(index) => format!("({})", self.subclause(index)),
        }
    }

    pub fn render_token<'t>(&self, token: &'t Token) -> Cow<'t, str> {
        match token.kind {
            TokenKind::Placeholder(placeholder) => Cow::Owned(self.restore(placeholder)),
            _ => Cow::Borrowed(token.text.as_str()),
        }
    }

    /// Joins tokens with single spaces, restoring every placeholder.
    pub fn render_tokens(&self, tokens: &[Token]) -> String {
        tokens
            .iter()
            .map(|token| self.render_token(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Joins grouped parts with single spaces.
pub fn join_parts(parts: &[ClausePart]) -> String {
    parts
        .iter()
        .map(ClausePart::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Re-appends the `LIMIT` suffix, separated by a single space.
pub fn attach_limit(body: String, limit: Option<&LimitSuffix>) -> String {
    match limit {
        Some(limit) if body.is_empty() => limit.text.clone(),
        Some(limit) => format!("{body} {}", limit.text),
        None => body,
    }
}
