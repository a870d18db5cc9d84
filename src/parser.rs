//! The report-parsing state machine.
//!
//! The Balancete export is a single flat sheet in which project boundaries,
//! subtotal rows and section headers are interleaved with data rows,
//! distinguishable only by textual markers and column-emptiness patterns.
//! This module scans the rows once, in order, tracking the currently open
//! project scope, and emits one flat record per accepted data row.
//!
//! Row-level anomalies (short rows, unparseable markers, ambiguous text) are
//! absorbed silently: the export is externally produced and inconsistently
//! formatted, so per-row strictness would make the parser unusable. That
//! leniency is a tested contract, not an accident.

use crate::error::{BalanceteError, Result};
use crate::schema::{
    ColumnRole, LineItemRecord, ParseOutcome, ParserConfig, RawGrid, ReportWarning,
};
use crate::utils::cell_is_filled;
use std::collections::BTreeMap;

/// Substring that introduces a new project scope. May appear in any of the
/// three scanned columns.
pub const PROJECT_MARKER: &str = "PROJETO:";

/// Prefix of subtotal rows, skipped without closing the active scope.
pub const TOTAL_PREFIX: &str = "TOTAL:";

/// Prefix of section-header rows, likewise skipped.
pub const SECTION_PREFIX: &str = "PROJETOS VERBAS";

/// The four configured bindings resolved to zero-based header indices,
/// computed once per parse.
struct ResolvedColumns {
    account: usize,
    category: usize,
    description: usize,
    granted_value: usize,
}

impl ResolvedColumns {
    fn resolve(header: &[String], config: &ParserConfig) -> Result<Self> {
        let position = |role: ColumnRole| -> Result<usize> {
            let name = config.name_for(role).trim();
            header
                .iter()
                .position(|column| column == name)
                .ok_or_else(|| BalanceteError::ColumnNotFound {
                    role,
                    name: name.to_string(),
                })
        };

        Ok(Self {
            account: position(ColumnRole::Account)?,
            category: position(ColumnRole::Category)?,
            description: position(ColumnRole::Description)?,
            granted_value: position(ColumnRole::GrantedValue)?,
        })
    }

    fn max_index(&self) -> usize {
        self.account
            .max(self.category)
            .max(self.description)
            .max(self.granted_value)
    }
}

/// Scans `grid` once and emits one record per data row, each tagged with the
/// project scope that was active when the row was reached.
///
/// Fatal failure: any configured column name absent from the header
/// ([`BalanceteError::ColumnNotFound`]), raised before any row is read.
/// A grid with fewer than two rows is not an error; it yields an empty
/// outcome carrying [`ReportWarning::EmptyReport`].
///
/// This is a pure function of its inputs: no I/O, no logging, no state kept
/// between invocations.
pub fn parse_report(grid: &RawGrid, config: &ParserConfig) -> Result<ParseOutcome> {
    let mut records = Vec::new();
    let mut warnings = Vec::new();

    if grid.row_count() < 2 {
        warnings.push(ReportWarning::EmptyReport);
        return Ok(ParseOutcome { records, warnings });
    }

    let header = grid.header();
    let columns = ResolvedColumns::resolve(&header, config)?;
    let max_index = columns.max_index();

    // Active project scope; None until the first marker row. A scope is
    // only ever superseded, never closed, so is_some() doubles as the
    // "a project has been seen" flag.
    let mut current_project: Option<String> = None;

    for (offset, row) in grid.data_rows().iter().enumerate() {
        // A row too short to cover every configured index can be neither a
        // marker nor a valid data row.
        if row.len() <= max_index {
            continue;
        }

        let account = row[columns.account].trim();
        let category = row[columns.category].trim();
        let description = row[columns.description].trim();
        let search_text = format!("{} {} {}", account, category, description);

        // Project marker: everything after the first occurrence becomes the
        // new scope name.
        if let Some(at) = search_text.find(PROJECT_MARKER) {
            let name = search_text[at + PROJECT_MARKER.len()..].trim();
            current_project = Some(name.to_string());
            continue;
        }

        // Subtotal or section header: skipped, scope unchanged.
        if account.starts_with(TOTAL_PREFIX) || account.starts_with(SECTION_PREFIX) {
            continue;
        }

        // Preamble guard: nothing before the first project marker is data.
        let Some(project) = current_project.as_ref() else {
            continue;
        };

        // Validity gate on the raw (untrimmed) cells.
        let category_cell = row.get(columns.category).map(String::as_str);
        let granted_cell = row.get(columns.granted_value).map(String::as_str);
        if !cell_is_filled(category_cell) || !cell_is_filled(granted_cell) {
            continue;
        }

        let mut cells = BTreeMap::new();
        for (index, column) in header.iter().enumerate() {
            cells.insert(column.clone(), row.get(index).cloned());
        }

        records.push(LineItemRecord {
            project: project.clone(),
            source_row: offset + 1,
            cells,
        });
    }

    if records.is_empty() {
        warnings.push(ReportWarning::NoRecords);
    }

    Ok(ParseOutcome { records, warnings })
}
