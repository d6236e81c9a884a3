//! Row parser
//!
//! Splits delimited text into rows and keeps only the ones that carry a
//! usable `(x, y, material)` triple. Optional numeric columns never cause a
//! row to be rejected; unusable cells simply provide no override.

use serde::{Deserialize, Serialize};

use super::schema::{ColumnMap, resolve_columns};
use crate::consts::DELIMITER;
use crate::error::SchemaError;

/// A validated data row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OreRow {
    /// Column index (non-negative)
    pub x: i32,
    /// Row index (non-negative)
    pub y: i32,
    /// Material identifier as written in the dataset (trimmed)
    pub material: String,
    /// Hardness override, `None` falls back to the material default
    pub hardness: Option<u32>,
    /// Value override, `None` falls back to the material default
    pub value: Option<u32>,
}

/// Row accounting for one ingestion pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReport {
    /// Non-blank data lines seen (header excluded)
    pub rows_read: usize,
    /// Lines that became rows
    pub rows_accepted: usize,
    /// Lines dropped as malformed
    pub rows_skipped: usize,
}

/// Output of [`parse_rows`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRows {
    pub rows: Vec<OreRow>,
    pub report: IngestReport,
}

/// Parse header + data lines into validated rows.
///
/// Fails only when the header cannot be resolved. An empty result is not an
/// error at this level; the grid builder decides that.
pub fn parse_rows(text: &str) -> Result<ParsedRows, SchemaError> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    let headers: Vec<&str> = match lines.next() {
        Some(header) => split_cells(header).collect(),
        None => Vec::new(),
    };
    let columns = resolve_columns(&headers)?;

    let mut rows = Vec::new();
    let mut report = IngestReport::default();

    for line in lines {
        report.rows_read += 1;
        let cells: Vec<&str> = split_cells(line).collect();
        if cells.len() < headers.len() {
            continue;
        }
        if let Some(row) = parse_row(&cells, &columns) {
            rows.push(row);
        }
    }

    report.rows_accepted = rows.len();
    report.rows_skipped = report.rows_read - report.rows_accepted;

    Ok(ParsedRows { rows, report })
}

fn split_cells(line: &str) -> impl Iterator<Item = &str> {
    line.split(DELIMITER).map(str::trim)
}

fn parse_row(cells: &[&str], columns: &ColumnMap) -> Option<OreRow> {
    let x = parse_coord(cells[columns.x])?;
    let y = parse_coord(cells[columns.y])?;
    let material = cells[columns.material];
    if material.is_empty() {
        return None;
    }

    let hardness = columns
        .hardness
        .and_then(|i| parse_count(cells[i]))
        .filter(|h| *h > 0);
    let value = columns.value.and_then(|i| parse_count(cells[i]));

    Some(OreRow {
        x,
        y,
        material: material.to_string(),
        hardness,
        value,
    })
}

/// Grid coordinates are zero-based; negatives can't be placed
fn parse_coord(cell: &str) -> Option<i32> {
    cell.parse::<i32>().ok().filter(|c| *c >= 0)
}

/// Non-negative whole number; decimals like `150.5` truncate toward zero
fn parse_count(cell: &str) -> Option<u32> {
    if let Ok(n) = cell.parse::<u32>() {
        return Some(n);
    }
    let n = cell.parse::<f64>().ok()?;
    if !n.is_finite() || n < 0.0 || n >= f64::from(u32::MAX) + 1.0 {
        return None;
    }
    Some(n.trunc() as u32)
}
