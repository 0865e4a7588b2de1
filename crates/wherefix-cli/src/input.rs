//! Input handling for clause files, `--expr` arguments and stdin.

use anyhow::{Context, Result};
use std::io::{self, Read};
use std::path::PathBuf;

/// One raw clause and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseInput {
    /// File name, `<expr>` or `<stdin>`.
    pub source: String,
    /// 1-based line number within the source.
    pub line: usize,
    pub clause: String,
}

/// Collects clauses from `--expr` arguments and files.
///
/// Stdin is read only when neither files nor expressions are given.
/// Files and stdin hold one clause per line; blank lines are skipped.
pub fn read_input(files: &[PathBuf], exprs: &[String]) -> Result<Vec<ClauseInput>> {
    let mut clauses: Vec<ClauseInput> = exprs
        .iter()
        .enumerate()
        .map(|(i, clause)| ClauseInput {
            source: "<expr>".to_string(),
            line: i + 1,
            clause: clause.clone(),
        })
        .collect();

    if !files.is_empty() {
        clauses.extend(read_from_files(files)?);
    } else if exprs.is_empty() {
        clauses.extend(read_from_stdin()?);
    }

    Ok(clauses)
}

/// Read clauses from stdin
fn read_from_stdin() -> Result<Vec<ClauseInput>> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read from stdin")?;

    Ok(split_lines("<stdin>", &content))
}

/// Read clauses from multiple files
fn read_from_files(files: &[PathBuf]) -> Result<Vec<ClauseInput>> {
    let mut clauses = Vec::new();
    for path in files {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        clauses.extend(split_lines(&path.display().to_string(), &content));
    }
    Ok(clauses)
}

fn split_lines(source: &str, content: &str) -> Vec<ClauseInput> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| ClauseInput {
            source: source.to_string(),
            line: i + 1,
            clause: line.to_string(),
        })
        .collect()
}
