//! Output column name cleaning.
//!
//! Column lists arrive as loosely as clauses do: padded, comma-joined,
//! repeated with different casing. They are reduced to a clean, ordered list.

use std::collections::HashSet;

/// Trims, splits comma-joined entries, drops blanks and removes
/// case-insensitive duplicates. The first spelling of a name wins.
pub fn clean_output_columns<S: AsRef<str>>(columns: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    columns
        .iter()
        .flat_map(|entry| entry.as_ref().split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Builds a `", "`-joined select list, or `None` when no column survives cleaning.
pub fn format_select_list<S: AsRef<str>>(columns: &[S]) -> Option<String> {
    let cleaned = clean_output_columns(columns);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blanks() {
        assert_eq!(
            clean_output_columns(&[" Id ", "", "  ", "Name"]),
            vec!["Id", "Name"]
        );
    }

    #[test]
    fn splits_comma_joined_entries() {
        assert_eq!(
            clean_output_columns(&["Id, Name,Owner.Email", "Amount"]),
            vec!["Id", "Name", "Owner.Email", "Amount"]
        );
    }

    #[test]
    fn dedupes_case_insensitively_keeping_first_spelling() {
        assert_eq!(
            clean_output_columns(&["Name", "NAME", "id", "Id"]),
            vec!["Name", "id"]
        );
    }

    #[test]
    fn select_list() {
        assert_eq!(
            format_select_list(&["Id", "Name"]),
            Some("Id, Name".to_string())
        );
        assert_eq!(format_select_list::<&str>(&[]), None);
        assert_eq!(format_select_list(&[" , "]), None);
    }
}
