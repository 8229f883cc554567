//! # dataset
//!
//! CSV loading into a Polars [`DataFrame`] and per-column summary statistics.
//! The summary is what gets embedded into the exploratory-analysis prompt, so
//! every column of the input must yield a non-empty entry.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::path::Path;
use tracing::info;

mod stats;

pub use stats::{summarize, summary_json, ColumnSummary};

/// Loads a CSV file into a DataFrame (header row, schema inference).
pub fn load_csv_from_file(path: &Path) -> Result<DataFrame> {
    let df = CsvReader::from_path(path)
        .with_context(|| format!("Failed to open CSV file {}", path.display()))?
        .has_header(true)
        .infer_schema(Some(100))
        .finish()
        .context("Failed to parse CSV")?;

    if df.width() == 0 {
        bail!("CSV has no columns");
    }

    info!(
        rows = df.height(),
        columns = df.width(),
        "Loaded CSV dataset"
    );
    Ok(df)
}
