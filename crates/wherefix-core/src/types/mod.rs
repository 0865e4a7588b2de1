//! Types for the clause cleaning API.
//!
//! The API accepts a raw filter clause plus optional output columns and
//! options, and returns the cleaned clause with any diagnostics.

mod common;
mod request;
mod response;

pub use common::{issue_codes, Issue, Severity};
pub use request::{CleanOptions, CleanRequest, DEFAULT_DATE_FIELDS};
pub use response::CleanResult;
