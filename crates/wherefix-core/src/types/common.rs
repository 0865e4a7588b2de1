//! Common types shared between request and response.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A non-fatal diagnostic produced while cleaning a clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Severity level
    pub severity: Severity,

    /// Machine-readable issue code
    pub code: String,

    /// Human-readable message
    pub message: String,
}

impl Issue {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Machine-readable issue codes.
pub mod issue_codes {
    pub const REQUEST_PARSE_ERROR: &str = "REQUEST_PARSE_ERROR";
    pub const INVALID_OPTIONS: &str = "INVALID_OPTIONS";
    pub const UNBALANCED_QUOTE: &str = "UNBALANCED_QUOTE";
    pub const UNBALANCED_PAREN: &str = "UNBALANCED_PAREN";
    pub const NESTING_TOO_DEEP: &str = "NESTING_TOO_DEEP";
}
