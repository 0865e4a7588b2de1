//! Quoted string literal protection.

use super::fragment::{push_text, ProtectedLiteral, Segment};
use regex::Regex;
use std::sync::OnceLock;

fn literal_regex() -> &'static Regex {
    static LITERAL_REGEX: OnceLock<Regex> = OnceLock::new();
    LITERAL_REGEX
        .get_or_init(|| Regex::new(r#"'([^']*)'|"([^"]*)""#).expect("Invalid regex pattern"))
}

/// Replaces every `'...'` / `"..."` literal in `text` with a [`Segment::Literal`].
///
/// Literals are indexed in order of appearance. Quotes that do not close are
/// left in the text untouched.
pub fn protect_literals(text: &str) -> (Vec<Segment>, Vec<ProtectedLiteral>) {
    let mut segments = Vec::new();
    let mut literals = Vec::new();
    let mut last_end = 0;

    for caps in literal_regex().captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let content = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();

        push_text(&mut segments, &text[last_end..whole.start()]);
        let index = literals.len();
        literals.push(ProtectedLiteral {
            index,
            original_text: content.to_string(),
        });
        segments.push(Segment::Literal(index));
        last_end = whole.end();
    }
    push_text(&mut segments, &text[last_end..]);

    (segments, literals)
}

/// Returns true if a quote character survived protection.
pub fn has_stray_quote(segments: &[Segment]) -> bool {
    segments.iter().any(|segment| match segment {
        Segment::Text(text) => text.contains(&['\'', '"'][..]),
        _ => false,
    })
}
