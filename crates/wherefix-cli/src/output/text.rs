//! Plain text output formatting.

use super::ClauseReport;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::fmt::Write;
use wherefix_core::Severity;

/// Format one cleaned clause per line, preceded by the select list when present.
///
/// Blank clauses produce an empty line so output lines up with input.
pub fn format_text(reports: &[ClauseReport], with_where: bool, use_colors: bool) -> String {
    let colored = use_colors && std::io::stdout().is_terminal();
    let mut out = String::new();

    if let Some(select_list) = reports.first().and_then(|r| r.result.select_list.as_ref()) {
        if colored {
            writeln!(out, "{} {select_list}", "SELECT".bold()).unwrap();
        } else {
            writeln!(out, "SELECT {select_list}").unwrap();
        }
    }

    for report in reports {
        let clause = &report.result.clause;
        if with_where && !clause.is_empty() {
            if colored {
                writeln!(out, "{} {clause}", "WHERE".bold()).unwrap();
            } else {
                writeln!(out, "{}", report.result.where_clause).unwrap();
            }
        } else {
            writeln!(out, "{clause}").unwrap();
        }
    }

    out
}

/// Format every issue as `source:line: severity[CODE]: message`.
pub fn format_issues(reports: &[ClauseReport], use_colors: bool) -> String {
    let colored = use_colors && std::io::stderr().is_terminal();
    let mut out = String::new();

    for report in reports {
        for issue in &report.result.issues {
            let location = format!("{}:{}", report.source, report.line);
            let label = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            let tag = format!("{label}[{}]", issue.code);

            if colored {
                let tag = match issue.severity {
                    Severity::Error => tag.red().bold().to_string(),
                    Severity::Warning => tag.yellow().to_string(),
                };
                writeln!(out, "{}: {tag}: {}", location.dimmed(), issue.message).unwrap();
            } else {
                writeln!(out, "{location}: {tag}: {}", issue.message).unwrap();
            }
        }
    }

    out
}
