//! Recursive structure handling: `WHERE` splitting and parenthesis extraction.
//!
//! Every fragment is first split at a depth-0 `WHERE` keyword (the prefix is
//! kept verbatim, only the predicate after it is cleaned). Balanced groups are
//! then found with a bracket stack: a group preceded by a word character is a
//! function call and stays whole, any other group is cleaned recursively and
//! replaced by a sub-clause placeholder.

use super::fragment::{push_char, Placeholder, ProtectedLiteral, ProtectedSubclause, Segment};
use super::grouper::group_conditions;
use super::reassemble::{join_parts, ProtectedSpans};
use super::tokenizer::tokenize;
use crate::types::CleanOptions;
#[cfg(feature = "tracing")]
use tracing::trace;

const WHERE_KEYWORD: &str = "WHERE";

/// Groups nested deeper than this are kept verbatim instead of being cleaned.
pub const MAX_NESTING_DEPTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Item {
    Char(char),
    Literal(usize),
}

/// Cleans fragments whose literals have already been protected.
pub struct Cleaner<'a> {
    literals: &'a [ProtectedLiteral],
    options: &'a CleanOptions,
    depth: usize,
    unbalanced_parens: bool,
    too_deep: bool,
}

impl<'a> Cleaner<'a> {
    pub fn new(literals: &'a [ProtectedLiteral], options: &'a CleanOptions) -> Self {
        Self {
            literals,
            options,
            depth: 0,
            unbalanced_parens: false,
            too_deep: false,
        }
    }

    /// True once a parenthesis without a partner has been seen.
    pub fn found_unbalanced_parens(&self) -> bool {
        self.unbalanced_parens
    }

    /// True once a group beyond [`MAX_NESTING_DEPTH`] was kept verbatim.
    pub fn found_deep_nesting(&self) -> bool {
        self.too_deep
    }

    /// Cleans a fragment produced by [`super::literals::protect_literals`].
    pub fn clean(&mut self, segments: &[Segment]) -> String {
        let items = flatten(segments);
        self.clean_items(&items)
    }

    fn clean_items(&mut self, items: &[Item]) -> String {
        let mut parts = Vec::new();
        let mut rest = items;
        while let Some(split) = find_where(rest) {
            let prefix = render_items(&rest[..split], self.literals);
            #[cfg(feature = "tracing")]
            trace!(prefix = prefix.trim(), "splitting at WHERE keyword");
            parts.push(prefix.trim().to_string());
            rest = &rest[split..];
        }

        let predicate = self.clean_predicate(rest);
        if !predicate.is_empty() {
            parts.push(predicate);
        }
        parts.join(" ")
    }

    fn clean_predicate(&mut self, items: &[Item]) -> String {
        if items
            .iter()
            .all(|item| matches!(item, Item::Char(c) if c.is_whitespace()))
        {
            return String::new();
        }

        let (flat, subclauses) = self.extract_groups(items);
        let spans = ProtectedSpans::new(self.literals, &subclauses);
        let tokens = tokenize(&flat);
        #[cfg(feature = "tracing")]
        trace!(
            tokens = tokens.len(),
            subclauses = subclauses.len(),
            "tokenized fragment"
        );
        join_parts(&group_conditions(&tokens, &spans, self.options))
    }

    fn extract_groups(&mut self, items: &[Item]) -> (Vec<Segment>, Vec<ProtectedSubclause>) {
        let partners = match_parens(items);
        let mut out = Vec::new();
        let mut subclauses = Vec::new();
        let mut i = 0;

        while i < items.len() {
            if let (Item::Char('('), Some(close)) = (items[i], partners[i]) {
                if ends_with_word_char(&out) {
                    let mut call = take_trailing_identifier(&mut out);
                    call.push_str(&render_items(&items[i..=close], self.literals));
                    out.push(Segment::Call(call));
                } else {
                    let cleaned_text = self.clean_group(&items[i + 1..close]);
                    let index = subclauses.len();
                    subclauses.push(ProtectedSubclause {
                        index,
                        cleaned_text,
                    });
                    out.push(Segment::Subclause(index));
                }
                i = close + 1;
                continue;
            }

            match items[i] {
                Item::Char(c) => {
                    if c == '(' || c == ')' {
                        self.unbalanced_parens = true;
                    }
                    push_char(&mut out, c);
                }
                Item::Literal(index) => out.push(Segment::Literal(index)),
            }
            i += 1;
        }

        (out, subclauses)
    }
}

impl Cleaner<'_> {
    fn clean_group(&mut self, inner: &[Item]) -> String {
        if self.depth >= MAX_NESTING_DEPTH {
            self.too_deep = true;
            return render_items(inner, self.literals).trim().to_string();
        }
        self.depth += 1;
        let cleaned = self.clean_items(inner);
        self.depth -= 1;
        cleaned
    }
}

fn flatten(segments: &[Segment]) -> Vec<Item> {
    let mut items = Vec::new();
    for segment in segments {
        match segment {
            Segment::Text(text) | Segment::Call(text) => items.extend(text.chars().map(Item::Char)),
            Segment::Literal(index) => items.push(Item::Literal(*index)),
            // Sub-clauses only exist after extraction.
            Segment::Subclause(_) => {}
        }
    }
    items
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_word_item(item: Item) -> bool {
    matches!(item, Item::Char(c) if is_word_char(c))
}

/// Index just past the first depth-0 standalone `WHERE` keyword.
fn find_where(items: &[Item]) -> Option<usize> {
    let len = WHERE_KEYWORD.len();
    let mut depth = 0usize;

    for i in 0..items.len() {
        match items[i] {
            Item::Char('(') => depth += 1,
            Item::Char(')') => depth = depth.saturating_sub(1),
            _ => {}
        }
        if depth != 0 || i + len > items.len() {
            continue;
        }

        let spelled = items[i..i + len]
            .iter()
            .zip(WHERE_KEYWORD.chars())
            .all(|(item, expected)| matches!(item, Item::Char(c) if c.eq_ignore_ascii_case(&expected)));
        let bounded_before = i == 0 || !is_word_item(items[i - 1]);
        let bounded_after = i + len == items.len() || !is_word_item(items[i + len]);
        if spelled && bounded_before && bounded_after {
            return Some(i + len);
        }
    }

    None
}

/// Maps each `(` to its matching `)`. Unmatched parentheses map to `None`.
fn match_parens(items: &[Item]) -> Vec<Option<usize>> {
    let mut partners = vec![None; items.len()];
    let mut stack = Vec::new();

    for (i, item) in items.iter().enumerate() {
        match item {
            Item::Char('(') => stack.push(i),
            Item::Char(')') => {
                if let Some(open) = stack.pop() {
                    partners[open] = Some(i);
                }
            }
            _ => {}
        }
    }

    partners
}

fn render_items(items: &[Item], literals: &[ProtectedLiteral]) -> String {
    let spans = ProtectedSpans::new(literals, &[]);
    let mut out = String::new();
    for item in items {
        match item {
            Item::Char(c) => out.push(*c),
            Item::Literal(index) => out.push_str(&spans.restore(Placeholder::Literal(*index))),
        }
    }
    out
}

fn ends_with_word_char(out: &[Segment]) -> bool {
    matches!(out.last(), Some(Segment::Text(text)) if text.chars().last().is_some_and(is_word_char))
}

fn take_trailing_identifier(out: &mut Vec<Segment>) -> String {
    let Some(Segment::Text(text)) = out.last_mut() else {
        return String::new();
    };
    let start = text
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_word_char(*c))
        .last()
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let name = text.split_off(start);
    if text.is_empty() {
        out.pop();
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::literals::protect_literals;

    fn clean(raw: &str) -> (String, bool) {
        let (segments, literals) = protect_literals(raw);
        let options = CleanOptions::default();
        let mut cleaner = Cleaner::new(&literals, &options);
        let cleaned = cleaner.clean(&segments);
        (cleaned, cleaner.found_unbalanced_parens())
    }

    #[test]
    fn groups_are_cleaned_independently() {
        let (cleaned, unbalanced) = clean("(Amount > 100 OR Amount < 10) AND Region = 'EMEA'");
        assert_eq!(
            cleaned,
            "(Amount > 100 OR Amount < 10) AND Region = 'EMEA'"
        );
        assert!(!unbalanced);
    }

    #[test]
    fn nested_groups_resolve_at_any_depth() {
        let (cleaned, _) = clean("((Stage = Won OR (Stage = Lost AND Amount > 5)) AND Type = New)");
        assert_eq!(
            cleaned,
            "((Stage = 'Won' OR (Stage = 'Lost' AND Amount > 5)) AND Type = 'New')"
        );
    }

    #[test]
    fn function_calls_are_not_groups() {
        let (cleaned, _) = clean("DAY_ONLY(CreatedDate) = 2024-01-01");
        assert_eq!(cleaned, "DAY_ONLY(CreatedDate) = 2024-01-01");

        let (cleaned, _) = clean("CALENDAR_YEAR(CloseDate) = 2024");
        assert_eq!(cleaned, "CALENDAR_YEAR(CloseDate) = '2024'");
    }

    #[test]
    fn function_call_with_literal_argument() {
        let (cleaned, _) = clean("Name = UPPER('acme')");
        assert_eq!(cleaned, "Name = UPPER('acme')");
    }

    #[test]
    fn parentheses_inside_literals_are_ignored() {
        let (cleaned, unbalanced) = clean("Name = 'Acme (EU'");
        assert_eq!(cleaned, "Name = 'Acme (EU'");
        assert!(!unbalanced);
    }

    #[test]
    fn where_prefix_is_kept_verbatim() {
        let (cleaned, _) = clean("Id IN (SELECT AccountId FROM Contact WHERE Email LIKE acme.com)");
        assert_eq!(
            cleaned,
            "Id IN (SELECT AccountId FROM Contact WHERE Email LIKE '%acme.com%')"
        );
    }

    #[test]
    fn where_inside_group_does_not_split_outer_fragment() {
        let (cleaned, _) = clean("(SELECT Id FROM Case WHERE Status = New) AND Origin = Web");
        assert_eq!(
            cleaned,
            "(SELECT Id FROM Case WHERE Status = 'New') AND Origin = 'Web'"
        );
    }

    #[test]
    fn where_must_be_a_standalone_word() {
        assert_eq!(find_where(&flatten(&[Segment::Text("Somewhere = x".to_string())])), None);
        assert_eq!(
            find_where(&flatten(&[Segment::Text("FROM t where x".to_string())])),
            Some(12)
        );
    }

    #[test]
    fn unbalanced_parentheses_degrade_to_text() {
        let (cleaned, unbalanced) = clean("(Name = Acme");
        assert!(unbalanced);
        assert_eq!(cleaned, "Name = 'Acme'");

        let (cleaned, unbalanced) = clean("Name = Acme) OR (Type = A");
        assert!(unbalanced);
        assert_eq!(cleaned, "Name = 'Acme' OR Type = 'A'");
    }

    #[test]
    fn empty_group() {
        let (cleaned, _) = clean("() AND Name = x");
        assert_eq!(cleaned, "() AND Name = 'x'");
    }

    #[test]
    fn deep_nesting_is_kept_verbatim_past_the_limit() {
        let depth = MAX_NESTING_DEPTH * 20;
        let raw = format!("{}A = 1{}", "(".repeat(depth), ")".repeat(depth));
        let (segments, literals) = protect_literals(&raw);
        let options = CleanOptions::default();
        let mut cleaner = Cleaner::new(&literals, &options);

        assert_eq!(cleaner.clean(&segments), raw);
        assert!(cleaner.found_deep_nesting());
        assert!(!cleaner.found_unbalanced_parens());
    }

    #[test]
    fn shallow_nesting_is_cleaned() {
        let depth = MAX_NESTING_DEPTH;
        let raw = format!("{}A = x{}", "(".repeat(depth), ")".repeat(depth));
        let (segments, literals) = protect_literals(&raw);
        let options = CleanOptions::default();
        let mut cleaner = Cleaner::new(&literals, &options);

        let expected = format!("{}A = 'x'{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(cleaner.clean(&segments), expected);
        assert!(!cleaner.found_deep_nesting());
    }

    #[test]
    fn repeated_where_keywords_split_in_order() {
        let (cleaned, _) = clean("SELECT Id FROM t WHERE x WHERE Name = Acme");
        assert_eq!(cleaned, "SELECT Id FROM t WHERE x WHERE Name = 'Acme'");

        let (cleaned, _) = clean("FROM t WHERE");
        assert_eq!(cleaned, "FROM t WHERE");
    }

    #[test]
    fn blank_fragment() {
        assert_eq!(clean("   ").0, "");
    }
}
