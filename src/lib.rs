//! # Balancete Parser
//!
//! A library for flattening the "Balancete" report exported by an external
//! accounting system (Sigeo) into an analysis-ready table.
//!
//! The export is not a clean table: project boundaries, subtotal rows and
//! section headers are interleaved with data rows in one flat sheet,
//! distinguishable only by textual markers (`"PROJETO:"`, `"TOTAL:"`) and by
//! which columns happen to be empty. This crate reconstructs the implicit
//! hierarchy (project -> line items) with a single-pass state machine and
//! hands back flat records, each tagged with its owning project.
//!
//! ## Core Concepts
//!
//! - **RawGrid**: the materialized sheet, header row plus ragged string rows
//! - **ParserConfig**: four column-name bindings resolved against the header
//! - **LineItemRecord**: one line item, every header column plus `"Projeto"`
//! - **Cleaning**: monetary/date typing with `Missing` instead of errors
//! - **Leniency**: malformed rows are dropped silently; only a missing
//!   configured column is fatal
//!
//! ## Example
//!
//! ```rust,ignore
//! use balancete_parser::*;
//!
//! let grid = RawGrid::from_values(vec![
//!     vec!["Conta Corrente".into(), "Alínea".into(), "Descrição".into(), "Valor Concedido".into()],
//!     vec!["".into(), "".into(), "PROJETO: Expansão Norte".into(), "".into()],
//!     vec!["1001-2".into(), "AL1".into(), "Equipamentos".into(), "R$ 1.234,56".into()],
//! ]);
//!
//! let config = ParserConfig {
//!     account_column: "Conta Corrente".into(),
//!     category_column: "Alínea".into(),
//!     description_column: "Descrição".into(),
//!     granted_value_column: "Valor Concedido".into(),
//! };
//!
//! let report = process_and_clean(&grid, &config, &CleanerConfig::standard(&config))?;
//! assert_eq!(report.records[0].project, "Expansão Norte");
//! ```

pub mod cleaner;
pub mod error;
pub mod export;
pub mod parser;
pub mod schema;
pub mod summary;
pub mod utils;

pub use cleaner::clean_records;
pub use error::{BalanceteError, Result};
pub use export::{to_delimited_string, write_delimited, DEFAULT_SEPARATOR};
pub use parser::{parse_report, PROJECT_MARKER, SECTION_PREFIX, TOTAL_PREFIX};
pub use schema::*;
pub use summary::{
    column_total, grouped_totals, project_count, summarize_by_project, ProjectSummary,
};
pub use utils::*;

use log::{debug, info};

/// A parsed and cleaned report: typed records plus any non-fatal warnings
/// collected along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedReport {
    pub records: Vec<CleanRecord>,
    pub warnings: Vec<ReportWarning>,
}

pub struct BalanceteProcessor;

impl BalanceteProcessor {
    /// Runs the core parse only; records keep their raw string cells.
    pub fn parse(grid: &RawGrid, config: &ParserConfig) -> Result<ParseOutcome> {
        info!(
            "Parsing balancete grid: {} rows, header of {} columns",
            grid.row_count(),
            grid.header().len()
        );

        let outcome = parser::parse_report(grid, config)?;

        debug!(
            "Parse finished: {} records, {} warnings",
            outcome.records.len(),
            outcome.warnings.len()
        );
        for warning in &outcome.warnings {
            debug!("Parse warning: {:?}", warning);
        }

        Ok(outcome)
    }

    /// The full pipeline: parse, then type and filter the records.
    pub fn process(
        grid: &RawGrid,
        parser_config: &ParserConfig,
        cleaner_config: &CleanerConfig,
    ) -> Result<ProcessedReport> {
        let outcome = Self::parse(grid, parser_config)?;
        let records = clean_records(
            &outcome.records,
            &parser_config.category_column,
            cleaner_config,
        );

        debug!("Cleaning kept {} of {} records", records.len(), outcome.records.len());

        Ok(ProcessedReport {
            records,
            warnings: outcome.warnings,
        })
    }
}

/// See [`BalanceteProcessor::parse`].
pub fn process_report(grid: &RawGrid, config: &ParserConfig) -> Result<ParseOutcome> {
    BalanceteProcessor::parse(grid, config)
}

/// See [`BalanceteProcessor::process`].
pub fn process_and_clean(
    grid: &RawGrid,
    parser_config: &ParserConfig,
    cleaner_config: &CleanerConfig,
) -> Result<ProcessedReport> {
    BalanceteProcessor::process(grid, parser_config, cleaner_config)
}
