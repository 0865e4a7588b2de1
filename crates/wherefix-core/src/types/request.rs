//! Request-side types for the clause cleaning API.

use crate::error::OptionsError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Column names whose values are always treated as dates and never quoted.
pub const DEFAULT_DATE_FIELDS: &[&str] = &["createddate", "lastmodifieddate", "systemmodstamp"];

/// A request to clean one filter clause.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct CleanRequest {
    /// The raw, possibly LLM-generated filter expression.
    pub clause: String,

    /// Optional output column names to clean alongside the clause.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,

    /// Optional cleaning options. Defaults apply when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<CleanOptions>,
}

impl CleanRequest {
    pub fn new(clause: impl Into<String>) -> Self {
        Self {
            clause: clause.into(),
            ..Self::default()
        }
    }
}

/// Knobs for the quoting policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CleanOptions {
    /// Column-name fragments treated as date fields, matched case-insensitively
    /// by substring. Values compared against these columns are never quoted.
    #[serde(default = "default_date_fields")]
    pub date_fields: Vec<String>,
}

fn default_date_fields() -> Vec<String> {
    DEFAULT_DATE_FIELDS.iter().map(|s| s.to_string()).collect()
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            date_fields: default_date_fields(),
        }
    }
}

impl CleanOptions {
    /// Adds extra date fields, skipping names already present.
    pub fn with_date_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for field in fields {
            let field = field.into();
            if !self.has_exact_field(&field) {
                self.date_fields.push(field);
            }
        }
        self
    }

    fn has_exact_field(&self, field: &str) -> bool {
        self.date_fields
            .iter()
            .any(|known| known.eq_ignore_ascii_case(field))
    }

    /// Returns true if `column` contains any configured date field name.
    pub fn is_date_field(&self, column: &str) -> bool {
        let column = column.to_lowercase();
        self.date_fields
            .iter()
            .any(|field| column.contains(&field.to_lowercase()))
    }

    /// Checks that every date field is a non-empty, whitespace-free name.
    pub fn validate(&self) -> Result<(), OptionsError> {
        for field in &self.date_fields {
            if field.is_empty() {
                return Err(OptionsError::EmptyDateField);
            }
            if field.chars().any(char::is_whitespace) {
                return Err(OptionsError::InvalidDateField(field.clone()));
            }
        }
        Ok(())
    }
}
