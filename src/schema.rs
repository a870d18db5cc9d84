use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Name of the synthetic column added to every emitted record. It shadows
/// any source column of the same name.
pub const PROJECT_FIELD: &str = "Projeto";

/// Logical roles the caller binds to actual header names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    Account,
    Category,
    Description,
    GrantedValue,
}

impl ColumnRole {
    /// The configuration key this role is read from, e.g. in a settings store.
    pub fn config_key(&self) -> &'static str {
        match self {
            ColumnRole::Account => "account_column",
            ColumnRole::Category => "category_column",
            ColumnRole::Description => "description_column",
            ColumnRole::GrantedValue => "granted_value_column",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

/// Column-name bindings supplied by the caller, typically deserialized from
/// an external settings store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    pub account_column: String,
    pub category_column: String,
    pub description_column: String,
    pub granted_value_column: String,
}

impl ParserConfig {
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn name_for(&self, role: ColumnRole) -> &str {
        match role {
            ColumnRole::Account => &self.account_column,
            ColumnRole::Category => &self.category_column,
            ColumnRole::Description => &self.description_column,
            ColumnRole::GrantedValue => &self.granted_value_column,
        }
    }
}

/// A fully materialized 2-D grid of string cells, as handed over by whatever
/// fetched the report (sheet API, CSV reader, ...). The first row is the
/// header; data rows may be shorter than the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGrid {
    values: Vec<Vec<String>>,
}

impl RawGrid {
    pub fn from_values(values: Vec<Vec<String>>) -> Self {
        Self { values }
    }

    /// Total row count, header included.
    pub fn row_count(&self) -> usize {
        self.values.len()
    }

    /// Header names, trimmed of surrounding whitespace. Empty if the grid
    /// has no rows at all.
    pub fn header(&self) -> Vec<String> {
        self.values
            .first()
            .map(|row| row.iter().map(|name| name.trim().to_string()).collect())
            .unwrap_or_default()
    }

    /// Everything below the header, in source order.
    pub fn data_rows(&self) -> &[Vec<String>] {
        if self.values.len() > 1 {
            &self.values[1..]
        } else {
            &[]
        }
    }
}

/// One financial line item, tagged with the project scope that owned it.
///
/// `cells` maps every header column name to the row's raw cell value
/// (`None` when the row was shorter than the header). The project name is
/// kept out of the map so it can shadow a same-named source column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemRecord {
    pub project: String,
    /// Zero-based row index within the source grid (the header is row 0).
    pub source_row: usize,
    pub cells: BTreeMap<String, Option<String>>,
}

impl LineItemRecord {
    /// Raw cell lookup by column name; the `Projeto` field wins over any
    /// source column of the same name.
    pub fn cell(&self, column: &str) -> Option<&str> {
        if column == PROJECT_FIELD {
            return Some(&self.project);
        }
        self.cells.get(column).and_then(|value| value.as_deref())
    }
}

/// Non-fatal signals the caller may surface to a user interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportWarning {
    /// Fewer than two rows supplied (header plus at least one data row).
    EmptyReport,
    /// The scan completed but no row classified as a data row.
    NoRecords,
}

/// Result of a parse run: records in source order plus any warnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseOutcome {
    pub records: Vec<LineItemRecord>,
    pub warnings: Vec<ReportWarning>,
}

/// A cell after downstream normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(value) => Some(*value),
            _ => None,
        }
    }
}

/// A line item with typed cells, ready for aggregation or display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub project: String,
    pub source_row: usize,
    pub cells: BTreeMap<String, CellValue>,
}

/// Controls the downstream normalization pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Columns converted with the monetary rules ("R$ 1.234,56" shape).
    pub monetary_columns: Vec<String>,
    /// Columns parsed as day-first dates.
    pub date_columns: Vec<String>,
    /// Collapse whitespace and en-dashes in project names.
    pub normalize_project_titles: bool,
}

/// Monetary columns the source report always carries, independent of the
/// four configured bindings.
pub const STANDARD_MONETARY_COLUMNS: &[&str] = &[
    "Valor Reservado",
    "Valor Pago",
    "$ Executado",
    "Saldo Projeto",
    "Saldo C.Cor",
    "Aditivo/Anulação",
    "Reman. Rec",
    "Reman. Env",
    "Lib. Recursos",
];

pub const STANDARD_DATE_COLUMNS: &[&str] = &["Vigência"];

impl CleanerConfig {
    /// The standard column lists of the source report, plus the configured
    /// granted-value column.
    pub fn standard(parser_config: &ParserConfig) -> Self {
        let mut monetary_columns: Vec<String> = STANDARD_MONETARY_COLUMNS
            .iter()
            .map(|name| name.to_string())
            .collect();
        let granted = parser_config.granted_value_column.trim().to_string();
        if !monetary_columns.contains(&granted) {
            monetary_columns.push(granted);
        }
        Self {
            monetary_columns,
            date_columns: STANDARD_DATE_COLUMNS
                .iter()
                .map(|name| name.to_string())
                .collect(),
            normalize_project_titles: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_from_json() {
        let json = r#"{
            "account_column": "Conta Corrente",
            "category_column": "Alínea",
            "description_column": "Descrição",
            "granted_value_column": "Valor Concedido"
        }"#;

        let config = ParserConfig::from_json(json).unwrap();
        assert_eq!(config.account_column, "Conta Corrente");
        assert_eq!(config.name_for(ColumnRole::Category), "Alínea");
        assert_eq!(config.name_for(ColumnRole::GrantedValue), "Valor Concedido");
    }

    #[test]
    fn test_grid_header_is_trimmed() {
        let grid = RawGrid::from_values(vec![
            vec!["  Conta ".to_string(), "Alínea\t".to_string()],
            vec!["1001".to_string(), "AL1".to_string()],
        ]);
        assert_eq!(grid.header(), vec!["Conta", "Alínea"]);
        assert_eq!(grid.data_rows().len(), 1);
    }

    #[test]
    fn test_project_field_shadows_source_column() {
        let mut cells = BTreeMap::new();
        cells.insert(PROJECT_FIELD.to_string(), Some("stale".to_string()));
        cells.insert("Conta".to_string(), Some("1001".to_string()));

        let record = LineItemRecord {
            project: "Alpha".to_string(),
            source_row: 3,
            cells,
        };

        assert_eq!(record.cell(PROJECT_FIELD), Some("Alpha"));
        assert_eq!(record.cell("Conta"), Some("1001"));
        assert_eq!(record.cell("missing"), None);
    }

    #[test]
    fn test_standard_cleaner_config_includes_granted_column() {
        let config = ParserConfig {
            account_column: "Conta Corrente".to_string(),
            category_column: "Alínea".to_string(),
            description_column: "Descrição".to_string(),
            granted_value_column: "Valor Concedido".to_string(),
        };

        let cleaner = CleanerConfig::standard(&config);
        assert!(cleaner
            .monetary_columns
            .iter()
            .any(|name| name == "Valor Concedido"));
        assert!(cleaner.monetary_columns.iter().any(|name| name == "Valor Pago"));
        assert_eq!(cleaner.date_columns, vec!["Vigência"]);

        // A granted column that is already standard must not be duplicated.
        let config = ParserConfig {
            granted_value_column: "Valor Pago".to_string(),
            ..config
        };
        let cleaner = CleanerConfig::standard(&config);
        let count = cleaner
            .monetary_columns
            .iter()
            .filter(|name| *name == "Valor Pago")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let mut cells = BTreeMap::new();
        cells.insert("Conta".to_string(), Some("1001".to_string()));
        cells.insert("Extra".to_string(), None);

        let record = LineItemRecord {
            project: "Alpha".to_string(),
            source_row: 2,
            cells,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: LineItemRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
