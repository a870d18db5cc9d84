//! Delimited-text serialization of parsed records.
//!
//! One row per record, header equal to the source header followed by the
//! `Projeto` column (or with `Projeto` shadowed in place when the source
//! already had one). The default separator is `;`, which keeps the `,`
//! decimal separator of monetary cells out of the way.

use crate::error::Result;
use crate::schema::{LineItemRecord, PROJECT_FIELD};
use std::io::Write;

pub const DEFAULT_SEPARATOR: char = ';';

fn escape_field(field: &str, separator: char) -> String {
    if field.contains(separator) || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Writes records as delimited text. `header` is the source header in its
/// original order; absent cells become empty fields.
pub fn write_delimited<W: Write>(
    writer: &mut W,
    header: &[String],
    records: &[LineItemRecord],
    separator: char,
) -> Result<()> {
    let mut columns: Vec<&str> = header.iter().map(String::as_str).collect();
    if !columns.iter().any(|column| *column == PROJECT_FIELD) {
        columns.push(PROJECT_FIELD);
    }

    let header_line: Vec<String> = columns
        .iter()
        .map(|column| escape_field(column, separator))
        .collect();
    writeln!(writer, "{}", header_line.join(&separator.to_string()))?;

    for record in records {
        let fields: Vec<String> = columns
            .iter()
            .map(|column| escape_field(record.cell(column).unwrap_or(""), separator))
            .collect();
        writeln!(writer, "{}", fields.join(&separator.to_string()))?;
    }

    Ok(())
}

/// Convenience wrapper returning the delimited text as a string.
pub fn to_delimited_string(
    header: &[String],
    records: &[LineItemRecord],
    separator: char,
) -> Result<String> {
    let mut buffer = Vec::new();
    write_delimited(&mut buffer, header, records, separator)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
