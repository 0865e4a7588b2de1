//! Detaches a trailing `LIMIT <n>` suffix from a raw clause.

use regex::Regex;
use std::sync::OnceLock;

/// The `LIMIT` suffix captured from the end of a clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitSuffix {
    /// The suffix exactly as written, trimmed of surrounding whitespace (e.g. `limit 5`).
    pub text: String,
    /// Parsed row count, `None` when the digits overflow `u64`.
    pub count: Option<u64>,
}

fn limit_regex() -> &'static Regex {
    static LIMIT_REGEX: OnceLock<Regex> = OnceLock::new();
    LIMIT_REGEX.get_or_init(|| {
        Regex::new(r"(?i)\b(LIMIT\s+(\d+))\s*$").expect("Invalid regex pattern")
    })
}

/// Splits `raw` into its body and an optional trailing `LIMIT` suffix.
///
/// When no suffix is present the body is returned unchanged.
pub fn extract_limit(raw: &str) -> (&str, Option<LimitSuffix>) {
    let Some(caps) = limit_regex().captures(raw) else {
        return (raw, None);
    };
    let (Some(whole), Some(suffix), Some(digits)) = (caps.get(0), caps.get(1), caps.get(2)) else {
        return (raw, None);
    };

    let suffix = LimitSuffix {
        text: suffix.as_str().to_string(),
        count: digits.as_str().parse().ok(),
    };
    (raw[..whole.start()].trim_end(), Some(suffix))
}
