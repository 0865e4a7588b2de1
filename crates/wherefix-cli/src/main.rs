//! wherefix CLI - filter clause normalizer

use wherefix_cli::cli;
use wherefix_cli::input;
use wherefix_cli::options::load_options;
use wherefix_cli::output;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;
use wherefix_core::{clean, CleanRequest};

use cli::{Args, OutputFormat};
use output::{format_issues, format_json, format_text, ClauseReport};

/// A clause reported an error issue.
const EXIT_FAILURE: u8 = 1;
/// Configuration error (e.g. unreadable config file or invalid date field).
const EXIT_CONFIG_ERROR: u8 = 66;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(EXIT_FAILURE)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("wherefix: error: {e:#}");
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}

fn run(args: Args) -> Result<bool> {
    let options = load_options(args.config.as_deref(), &args.date_fields)?;
    let clauses = input::read_input(&args.files, &args.exprs)?;
    let columns = (!args.columns.is_empty()).then(|| args.columns.clone());

    let reports: Vec<ClauseReport> = clauses
        .into_iter()
        .map(|input| {
            let request = CleanRequest {
                clause: input.clause.clone(),
                columns: columns.clone(),
                options: Some(options.clone()),
            };
            let result = clean(&request);
            ClauseReport::new(input, result)
        })
        .collect();

    let has_errors = reports.iter().any(|report| report.result.has_errors());

    let output_str = match args.format {
        OutputFormat::Json => format_json(&reports, args.compact),
        OutputFormat::Text => {
            if !args.quiet {
                eprint!("{}", format_issues(&reports, true));
            }
            format_text(&reports, args.with_where, true)
        }
    };

    write_output(&args.output, &output_str)?;

    Ok(has_errors)
}

fn write_output(path: &Option<std::path::PathBuf>, content: &str) -> Result<()> {
    if let Some(path) = path {
        fs::write(path, content)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    } else {
        io::stdout()
            .write_all(content.as_bytes())
            .context("Failed to write to stdout")?;
        // Ensure newline at end for terminal output
        if !content.is_empty() && !content.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}
