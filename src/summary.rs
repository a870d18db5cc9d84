//! Aggregation of cleaned records into per-project and per-column views.
//!
//! These are the numbers the surrounding application plots; the crate stops
//! at computing them.

use crate::schema::CleanRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Totals for one project across the requested monetary columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub project: String,
    pub line_items: usize,
    /// Column name -> sum over the project's records. Missing cells
    /// contribute nothing.
    pub totals: BTreeMap<String, f64>,
}

/// Sums `columns` per project. Output is ordered by project name.
pub fn summarize_by_project(records: &[CleanRecord], columns: &[String]) -> Vec<ProjectSummary> {
    let mut by_project: BTreeMap<&str, ProjectSummary> = BTreeMap::new();

    for record in records {
        let summary = by_project
            .entry(record.project.as_str())
            .or_insert_with(|| ProjectSummary {
                project: record.project.clone(),
                line_items: 0,
                totals: BTreeMap::new(),
            });
        summary.line_items += 1;

        for column in columns {
            if let Some(value) = record.cells.get(column).and_then(|cell| cell.as_number()) {
                *summary.totals.entry(column.clone()).or_insert(0.0) += value;
            }
        }
    }

    by_project.into_values().collect()
}

/// Sum of one monetary column over every record.
pub fn column_total(records: &[CleanRecord], column: &str) -> f64 {
    records
        .iter()
        .filter_map(|record| record.cells.get(column).and_then(|cell| cell.as_number()))
        .sum()
}

/// Number of distinct projects among the records.
pub fn project_count(records: &[CleanRecord]) -> usize {
    let mut projects: Vec<&str> = records
        .iter()
        .map(|record| record.project.as_str())
        .collect();
    projects.sort_unstable();
    projects.dedup();
    projects.len()
}

/// Sums `value_column` grouped by the text of `key_column`, descending, at
/// most `top` groups. Records whose key or value cell is missing are left
/// out of the grouping.
pub fn grouped_totals(
    records: &[CleanRecord],
    key_column: &str,
    value_column: &str,
    top: usize,
) -> Vec<(String, f64)> {
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();

    for record in records {
        let Some(key) = record.cells.get(key_column).and_then(|cell| cell.as_text()) else {
            continue;
        };
        let Some(value) = record.cells.get(value_column).and_then(|cell| cell.as_number())
        else {
            continue;
        };
        *groups.entry(key).or_insert(0.0) += value;
    }

    let mut totals: Vec<(String, f64)> = groups
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    totals.truncate(top);
    totals
}
