//! Error types.
//!
//! # Error Handling Strategy
//!
//! Cleaning a clause never fails: malformed input degrades to a best-effort,
//! verbatim reconstruction. Problems worth surfacing are collected as
//! [`crate::types::Issue`] values on the [`crate::types::CleanResult`].
//!
//! [`OptionsError`] covers the one fallible edge, caller-supplied
//! [`crate::types::CleanOptions`] that cannot be honored.

use thiserror::Error;

/// Invalid cleaning options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// A date field name is empty and would match every column.
    #[error("date field names must not be empty")]
    EmptyDateField,

    /// A date field name contains whitespace and can never match a column.
    #[error("invalid date field name: {0:?}")]
    InvalidDateField(String),
}
