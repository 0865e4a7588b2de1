//! Output formatting modules.

pub mod json;
pub mod text;

pub use json::format_json;
pub use text::{format_issues, format_text};

use crate::input::ClauseInput;
use serde::Serialize;
use wherefix_core::CleanResult;

/// A clean result together with the input it was produced from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseReport {
    pub source: String,
    pub line: usize,
    pub input: String,
    #[serde(flatten)]
    pub result: CleanResult,
}

impl ClauseReport {
    pub fn new(input: ClauseInput, result: CleanResult) -> Self {
        Self {
            source: input.source,
            line: input.line,
            input: input.clause,
            result,
        }
    }
}
