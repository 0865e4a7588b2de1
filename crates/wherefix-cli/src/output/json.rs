//! JSON output formatting.

use super::ClauseReport;

/// Format the reports as a JSON array.
///
/// If `compact` is true, outputs minified JSON without whitespace.
pub fn format_json(reports: &[ClauseReport], compact: bool) -> String {
    if compact {
        serde_json::to_string(reports).expect("serialization cannot fail")
    } else {
        serde_json::to_string_pretty(reports).expect("serialization cannot fail")
    }
}
