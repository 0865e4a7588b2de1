pub mod clause;
pub mod cleaner;
pub mod columns;
pub mod error;
pub mod types;

// Re-export main types and functions
pub use clause::{
    clean_where_clause, clean_where_clause_with, format_where_input_string, MAX_NESTING_DEPTH,
};
pub use cleaner::clean;
pub use columns::{clean_output_columns, format_select_list};
pub use error::OptionsError;

pub use types::{
    issue_codes, CleanOptions, CleanRequest, CleanResult, Issue, Severity, DEFAULT_DATE_FIELDS,
};
