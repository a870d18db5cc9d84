use chrono::NaiveDate;

/// Header names come in with stray whitespace from the export.
pub fn clean_header_name(name: &str) -> String {
    name.trim().to_string()
}

/// The canonical data-row validity check: a cell counts as filled when it is
/// present, not the empty string, and its trimmed lowercase form is not the
/// literal "nan". A whitespace-only cell passes; the source format relies
/// on that.
pub fn cell_is_filled(cell: Option<&str>) -> bool {
    match cell {
        Some(value) => !value.is_empty() && value.trim().to_lowercase() != "nan",
        None => false,
    }
}

/// Converts a monetary string of the "R$ 1.234,56" shape to a number:
/// every `R`, `$` and whitespace character is dropped, `.` thousands
/// separators are removed, the `,` decimal separator becomes `.`.
/// Anything that still fails to parse is reported as `None`.
pub fn parse_monetary(raw: &str) -> Option<f64> {
    let stripped: String = raw
        .chars()
        .filter(|&c| !matches!(c, 'R' | '$') && !c.is_whitespace())
        .collect();
    let normalized = stripped.replace('.', "").replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    // f64 parsing accepts "nan"/"inf"; a monetary cell holding those is
    // missing data, not a number.
    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}

const DAY_FIRST_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d/%m/%y"];

/// Day-first date parsing; unparseable values are reported as `None`.
pub fn parse_date_dayfirst(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DAY_FIRST_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Normalizes a project title: en-dash to hyphen, whitespace runs collapsed
/// to a single space, surrounding whitespace removed. The export is
/// inconsistent about all three.
pub fn normalize_title(raw: &str) -> String {
    raw.replace('–', "-")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
