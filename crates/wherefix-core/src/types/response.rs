//! Response-side types for the clause cleaning API.

use super::common::{Issue, Severity};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Result of cleaning one filter clause.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CleanResult {
    /// Cleaned clause body, `LIMIT` suffix included. Empty for blank input.
    pub clause: String,

    /// `WHERE <clause>`, or empty when the clause is empty.
    pub where_clause: String,

    /// Row count of a trailing `LIMIT`, when one was present and fits `u64`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// Cleaned output column names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<String>,

    /// Comma-separated select list built from `columns`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_list: Option<String>,

    /// Non-fatal diagnostics. The clause is always returned regardless.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<Issue>,
}

impl CleanResult {
    /// Create an error result with a single issue.
    /// Useful for returning errors from the WASM boundary or other entry points.
    pub fn from_error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![Issue::error(code, message)],
            ..Self::default()
        }
    }

    /// Quick check: true if any error-level issue was reported.
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }
}
