//! CSV output writer for the derived event table.

use std::fs::File;

use crate::core::table::{Column, EventTable};
use crate::error::Result;

/// Writes the derived table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Header: one entry per derived column, then one per participant
///   indicator, in [`EventTable::columns`] order
/// - Timestamps: `YYYY-MM-DD HH:MM:SS`
/// - Encoding: UTF-8
pub fn write_table_csv(table: &EventTable, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    write_rows(table, &mut writer)?;
    Ok(())
}

/// Converts the derived table to a CSV string.
///
/// Same format as [`write_table_csv`], but returns a String instead of
/// writing to a file.
pub fn to_table_csv(table: &EventTable) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    write_rows(table, &mut writer)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_rows<W: std::io::Write>(table: &EventTable, writer: &mut csv::Writer<W>) -> Result<()> {
    let columns = table.columns();

    let header: Vec<&str> = columns.iter().map(|(name, _)| name.as_str()).collect();
    writer.write_record(&header)?;

    for row in 0..table.len() {
        let record: Vec<String> = columns
            .iter()
            .map(|(_, column)| render_cell(column, row))
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

fn render_cell(column: &Column, row: usize) -> String {
    match column {
        Column::Bool(v) => v[row].to_string(),
        Column::UInt(v) => v[row].to_string(),
        Column::Float(v) => v[row].to_string(),
        Column::Str(v) => v[row].clone(),
        Column::Timestamp(v) => v[row].format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}
