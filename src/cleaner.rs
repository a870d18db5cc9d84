//! Downstream normalization of parsed records.
//!
//! The parser hands over raw strings; this pass types them. Monetary cells
//! ("R$ 1.234,56") become numbers, date cells become day-first dates, and
//! anything that fails to convert becomes [`CellValue::Missing`] rather than
//! an error. Records that end up without a category or project are discarded
//! here, not by the parser.

use crate::schema::{CellValue, CleanRecord, CleanerConfig, LineItemRecord, PROJECT_FIELD};
use crate::utils::{normalize_title, parse_date_dayfirst, parse_monetary};

fn clean_cell(raw: Option<&str>, column: &str, config: &CleanerConfig) -> CellValue {
    let Some(raw) = raw else {
        return CellValue::Missing;
    };

    if config.monetary_columns.iter().any(|name| name == column) {
        return match parse_monetary(raw) {
            Some(value) => CellValue::Number(value),
            None => CellValue::Missing,
        };
    }

    if config.date_columns.iter().any(|name| name == column) {
        return match parse_date_dayfirst(raw) {
            Some(date) => CellValue::Date(date),
            None => CellValue::Missing,
        };
    }

    if raw.trim().is_empty() || raw.trim().to_lowercase() == "nan" {
        CellValue::Missing
    } else {
        CellValue::Text(raw.to_string())
    }
}

/// Types every cell of every record and drops records whose category cell or
/// project name is missing afterwards.
///
/// `category_column` is the same binding the parser gated on; it is passed
/// separately so the cleaner stays usable on records from any source.
pub fn clean_records(
    records: &[LineItemRecord],
    category_column: &str,
    config: &CleanerConfig,
) -> Vec<CleanRecord> {
    let category_column = category_column.trim();

    records
        .iter()
        .filter_map(|record| {
            let project = if config.normalize_project_titles {
                normalize_title(&record.project)
            } else {
                record.project.clone()
            };
            if project.is_empty() {
                return None;
            }

            let cells: std::collections::BTreeMap<String, CellValue> = record
                .cells
                .iter()
                .filter(|(column, _)| column.as_str() != PROJECT_FIELD)
                .map(|(column, raw)| {
                    (
                        column.clone(),
                        clean_cell(raw.as_deref(), column, config),
                    )
                })
                .collect();

            match cells.get(category_column) {
                None => return None,
                Some(value) if value.is_missing() => return None,
                Some(_) => {}
            }

            Some(CleanRecord {
                project,
                source_row: record.source_row,
                cells,
            })
        })
        .collect()
}
