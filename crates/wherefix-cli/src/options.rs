//! Cleaning options assembled from `--config` and `--date-field`.

use anyhow::{Context, Result};
use std::path::Path;
use wherefix_core::CleanOptions;

/// Loads options from an optional JSON config file, then appends extra date fields.
///
/// Options that fail validation are a configuration error here, unlike the
/// library which falls back to defaults.
pub fn load_options(config: Option<&Path>, date_fields: &[String]) -> Result<CleanOptions> {
    let options = match config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_json::from_str::<CleanOptions>(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        }
        None => CleanOptions::default(),
    };

    let options = options.with_date_fields(date_fields.iter().cloned());
    options.validate().context("Invalid cleaning options")?;
    Ok(options)
}
