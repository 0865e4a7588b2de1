//! Working representation of a clause between pipeline stages.
//!
//! Quoted literals and extracted sub-clauses are carried as tagged segments
//! next to the plain text instead of being spelled into it, so no input text
//! can ever be mistaken for a placeholder.

/// Reference to a span that was lifted out of the working text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Index into the clause-wide [`ProtectedLiteral`] list.
    Literal(usize),
    /// Index into the [`ProtectedSubclause`] list of the current recursion level.
    Subclause(usize),
}

/// One piece of a clause fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Unprotected clause text.
    Text(String),
    /// A protected quoted literal.
    Literal(usize),
    /// A parenthesized group that has already been cleaned.
    Subclause(usize),
    /// A function call such as `DAY_ONLY(CreatedDate)`, kept verbatim.
    Call(String),
}

impl Segment {
    pub fn placeholder(&self) -> Option<Placeholder> {
        match self {
            Segment::Literal(index) => Some(Placeholder::Literal(*index)),
            Segment::Subclause(index) => Some(Placeholder::Subclause(*index)),
            Segment::Text(_) | Segment::Call(_) => None,
        }
    }
}

/// Original content of a quoted string literal, quotes stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedLiteral {
    pub index: usize,
    pub original_text: String,
}

/// Fully cleaned text of a parenthesized or nested-WHERE group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedSubclause {
    pub index: usize,
    pub cleaned_text: String,
}

/// Appends `text` to the trailing text segment, starting a new one if needed.
pub(crate) fn push_text(segments: &mut Vec<Segment>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Segment::Text(last)) = segments.last_mut() {
        last.push_str(text);
    } else {
        segments.push(Segment::Text(text.to_string()));
    }
}

/// Appends a single character to the trailing text segment.
pub(crate) fn push_char(segments: &mut Vec<Segment>, ch: char) {
    if let Some(Segment::Text(last)) = segments.last_mut() {
        last.push(ch);
    } else {
        segments.push(Segment::Text(ch.to_string()));
    }
}

/// Returns true if the fragment holds nothing but whitespace.
pub(crate) fn is_blank(segments: &[Segment]) -> bool {
    segments.iter().all(|segment| match segment {
        Segment::Text(text) => text.trim().is_empty(),
        _ => false,
    })
}
