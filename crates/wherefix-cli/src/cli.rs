//! CLI argument parsing using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// wherefix - filter clause normalizer
#[derive(Parser, Debug)]
#[command(name = "wherefix")]
#[command(about = "Clean up loosely written WHERE clauses", long_about = None)]
#[command(version)]
pub struct Args {
    /// Files with one clause per line (reads from stdin if no files or --expr are given)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Clause to clean (can be repeated)
    #[arg(short, long = "expr", value_name = "CLAUSE")]
    pub exprs: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Prefix cleaned clauses with the WHERE keyword
    #[arg(long)]
    pub with_where: bool,

    /// Extra date field whose values are never quoted (can be repeated)
    #[arg(long = "date-field", value_name = "NAME")]
    pub date_fields: Vec<String>,

    /// JSON file with cleaning options (e.g. {"dateFields": ["closedate"]})
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Comma-separated output columns to clean into a select list
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Compact JSON output (no pretty-printing)
    #[arg(short, long)]
    pub compact: bool,

    /// Suppress warnings on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One cleaned clause per line
    Text,
    /// JSON array of clean results
    Json,
}
