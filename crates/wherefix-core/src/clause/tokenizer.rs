//! Tokenizer for flat clause fragments.
//!
//! Runs after parenthesis extraction, so its input never holds balanced
//! top-level groups nor quoted literals. Characters that match no rule are
//! dropped from the stream.

use super::fragment::{Placeholder, Segment};
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Placeholder(Placeholder),
    /// `=`, `!=`, `>`, `<`, `>=`, `<=` or `LIKE`.
    Operator,
    Word,
    /// An `identifier(...)` call such as `DAY_ONLY(CreatedDate)`.
    Function,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Matched source text. Empty for placeholders.
    pub text: String,
    /// Byte offset into the fragment's text; placeholders are zero-width.
    pub offset: usize,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }

    pub fn is_operator(&self) -> bool {
        self.kind == TokenKind::Operator
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn is_subclause(&self) -> bool {
        matches!(self.kind, TokenKind::Placeholder(Placeholder::Subclause(_)))
    }

    /// Returns `AND` or `OR` when this token spells a logical keyword.
    pub fn logical_keyword(&self) -> Option<&'static str> {
        if self.kind != TokenKind::Word {
            return None;
        }
        if self.text.eq_ignore_ascii_case("AND") {
            Some("AND")
        } else if self.text.eq_ignore_ascii_case("OR") {
            Some("OR")
        } else {
            None
        }
    }
}

fn token_regex() -> &'static Regex {
    static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
    TOKEN_REGEX.get_or_init(|| {
        Regex::new(
            r"(?i)(?P<op>>=|<=|!=|=|>|<|\bLIKE\b)|(?P<func>\w+\([^()]*\))|(?P<word>[\w.%:+\-]+)",
        )
        .expect("Invalid regex pattern")
    })
}

/// Turns a flat fragment into an ordered token stream.
pub fn tokenize(segments: &[Segment]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    for segment in segments {
        match segment {
            Segment::Text(text) => {
                tokenize_text(text, offset, &mut tokens);
                offset += text.len();
            }
            Segment::Call(call) => {
                tokens.push(Token::new(TokenKind::Function, call.clone(), offset));
                offset += call.len();
            }
            Segment::Literal(_) | Segment::Subclause(_) => {
                if let Some(placeholder) = segment.placeholder() {
                    tokens.push(Token::new(
                        TokenKind::Placeholder(placeholder),
                        String::new(),
                        offset,
                    ));
                }
            }
        }
    }

    tokens
}

fn tokenize_text(text: &str, base: usize, tokens: &mut Vec<Token>) {
    for caps in token_regex().captures_iter(text) {
        let (kind, matched) = if let Some(m) = caps.name("op") {
            (TokenKind::Operator, m)
        } else if let Some(m) = caps.name("func") {
            (TokenKind::Function, m)
        } else if let Some(m) = caps.name("word") {
            (TokenKind::Word, m)
        } else {
            continue;
        };
        tokens.push(Token::new(kind, matched.as_str(), base + matched.start()));
    }
}
