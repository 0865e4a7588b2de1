use proptest::prelude::*;
use wherefix_core::{clean_where_clause, format_where_input_string, DEFAULT_DATE_FIELDS};

const KEYWORDS: &[&str] = &["and", "or", "like", "where", "limit", "true", "false"];

fn is_plain(word: &str) -> bool {
    let lowered = word.to_lowercase();
    !KEYWORDS.contains(&lowered.as_str())
        && !DEFAULT_DATE_FIELDS
            .iter()
            .any(|field| lowered.contains(field))
}

proptest! {
    #[test]
    fn whitespace_only_input_is_empty(raw in "[ \t\n]{0,12}") {
        prop_assert_eq!(clean_where_clause(&raw), "");
        prop_assert_eq!(format_where_input_string(&raw), "");
    }

    #[test]
    fn limit_suffix_survives_unmodified(
        column in "[A-Z][a-z]{1,8}",
        value in "[A-Za-z0-9]{1,10}",
        keyword in "(LIMIT|limit|Limit)",
        count in 0u32..100_000,
        glued in any::<bool>(),
    ) {
        prop_assume!(is_plain(&column) && is_plain(&value));

        let suffix = format!("{keyword} {count}");
        // A quoted value or a group may sit directly against the keyword.
        let body = if glued {
            format!("({column} = '{value}')")
        } else {
            format!("{column} = {value} ")
        };
        let cleaned = clean_where_clause(&format!("{body}{suffix}"));
        prop_assert!(cleaned.ends_with(&suffix), "{cleaned:?} lost {suffix:?}");
    }

    #[test]
    fn date_field_values_are_never_quoted(
        field in prop::sample::select(vec!["CreatedDate", "LastModifiedDate", "SystemModstamp"]),
        op in prop::sample::select(vec!["=", "!=", ">", "<", ">=", "<="]),
        value in "[A-Za-z0-9_:\\-]{1,12}",
    ) {
        prop_assume!(!KEYWORDS.contains(&value.to_lowercase().as_str()));

        let raw = format!("{field} {op} {value}");
        prop_assert_eq!(clean_where_clause(&raw), raw);
    }

    #[test]
    fn range_comparisons_are_never_quoted(
        column in "[A-Z][a-z]{1,8}",
        op in prop::sample::select(vec![">", "<", ">=", "<="]),
        value in "[A-Za-z0-9.]{1,10}",
    ) {
        prop_assume!(is_plain(&column) && is_plain(&value));

        let raw = format!("{column} {op} {value}");
        prop_assert_eq!(clean_where_clause(&raw), raw);
    }

    #[test]
    fn like_values_get_wildcards(
        column in "[A-Z][a-z]{1,8}",
        value in "[A-Za-z0-9]{1,10}",
    ) {
        prop_assume!(is_plain(&column) && is_plain(&value));

        let cleaned = clean_where_clause(&format!("{column} like {value}"));
        prop_assert_eq!(cleaned, format!("{column} LIKE '%{value}%'"));
    }

    #[test]
    fn apostrophes_are_doubled(
        column in "[A-Z][a-z]{1,8}",
        head in "[A-Za-z]{1,8}",
        tail in "[A-Za-z]{1,8}",
    ) {
        prop_assume!(is_plain(&column));

        let cleaned = clean_where_clause(&format!("{column} = \"{head}'{tail}\""));
        prop_assert_eq!(cleaned, format!("{column} = '{head}''{tail}'"));
    }

    #[test]
    fn parenthesized_groups_keep_their_parentheses(
        left in "[A-Z][a-z]{1,8}",
        right in "[A-Z][a-z]{1,8}",
        value in "[0-9]{1,6}",
    ) {
        prop_assume!(is_plain(&left) && is_plain(&right));

        let raw = format!("({left} > {value} OR {right} < {value}) AND ({left} >= {value})");
        prop_assert_eq!(clean_where_clause(&raw), raw);
    }

    #[test]
    fn arbitrary_input_never_panics(raw in any::<String>()) {
        let cleaned = clean_where_clause(&raw);
        let formatted = format_where_input_string(&raw);
        if cleaned.is_empty() {
            prop_assert!(formatted.is_empty());
        } else {
            prop_assert_eq!(formatted, format!("WHERE {cleaned}"));
        }
    }
}
