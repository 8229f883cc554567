//! Per-column summary statistics in the `describe(include="all")` shape:
//! numeric columns get count/mean/std/min/max, the rest get count/distinct/top/freq.

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

/// Summary of one column. Numeric fields are present for numeric columns,
/// `distinct`/`top`/`freq` for everything else.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: String,
    /// Non-null value count.
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinct: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freq: Option<usize>,
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (ddof = 1); None below two values.
fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let var = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (values.len() as f64 - 1.0);
    Some(var.sqrt())
}

fn numeric_summary(series: &Series) -> ColumnSummary {
    let values: Vec<f64> = series
        .cast(&DataType::Float64)
        .ok()
        .and_then(|s| s.f64().map(|ca| ca.into_iter().flatten().collect()).ok())
        .unwrap_or_default();

    let min = values.iter().copied().fold(None, |acc: Option<f64>, x| {
        Some(acc.map_or(x, |a| a.min(x)))
    });
    let max = values.iter().copied().fold(None, |acc: Option<f64>, x| {
        Some(acc.map_or(x, |a| a.max(x)))
    });

    ColumnSummary {
        name: series.name().to_string(),
        dtype: series.dtype().to_string(),
        count: values.len(),
        mean: if values.is_empty() {
            None
        } else {
            Some(mean(&values))
        },
        std: sample_std(&values),
        min,
        max,
        distinct: None,
        top: None,
        freq: None,
    }
}

fn categorical_summary(series: &Series) -> ColumnSummary {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for value in series.iter() {
        if matches!(value, AnyValue::Null) {
            continue;
        }
        let text = match value {
            AnyValue::Utf8(v) => v.to_string(),
            other => other.to_string(),
        };
        *counts.entry(text).or_insert(0) += 1;
    }

    let count = counts.values().sum();
    // Ties break on the value itself so the summary is deterministic.
    let top_entry = counts
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(value, freq)| (value.clone(), *freq));

    ColumnSummary {
        name: series.name().to_string(),
        dtype: series.dtype().to_string(),
        count,
        mean: None,
        std: None,
        min: None,
        max: None,
        distinct: Some(counts.len()),
        top: top_entry.as_ref().map(|(value, _)| value.clone()),
        freq: top_entry.map(|(_, freq)| freq),
    }
}

/// Summarizes every column of the DataFrame. Every input column yields an entry.
pub fn summarize(df: &DataFrame) -> Vec<ColumnSummary> {
    df.get_columns()
        .iter()
        .map(|series| {
            if series.dtype().is_numeric() {
                numeric_summary(series)
            } else {
                categorical_summary(series)
            }
        })
        .collect()
}

/// The summary serialized to JSON, ready to embed into a prompt.
pub fn summary_json(df: &DataFrame) -> Result<String> {
    serde_json::to_string(&summarize(df)).context("Failed to serialize dataset summary")
}
