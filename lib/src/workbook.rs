//! In-memory workbook model and the spreadsheet loader.
//!
//! The first row of every sheet is its header row. Remaining rows are data
//! rows whose first cell names the subject.

use crate::errors::WorkbookReadError;
use crate::infer::{CellValue, Timestamp};
use anyhow::Result;
use calamine::{open_workbook_auto, Data, Range, Reader};
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;

/// Strips a trailing parenthetical annotation (`"area (m2)"` becomes
/// `"area"`) and surrounding whitespace from a column header.
pub fn normalize_header(header: &str) -> &str {
    header
        .split_once(" (")
        .map_or(header, |(head, _)| head)
        .trim()
}

/// True for empty cells and for text cells equal to one of `na_values`.
pub fn is_missing(value: &CellValue, na_values: &[String]) -> bool {
    match value {
        CellValue::Empty => true,
        CellValue::String(s) | CellValue::Other(s) => na_values.iter().any(|na| na == s),
        _ => false,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

/// One data row, addressable by position or by header.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a [String],
    cells: &'a [CellValue],
}

impl<'a> Row<'a> {
    pub fn subject(&self) -> &'a CellValue {
        &self.cells[0]
    }

    pub fn cells(&self) -> &'a [CellValue] {
        self.cells
    }

    /// Looks a cell up by its raw header text. With duplicate headers the
    /// first matching column wins.
    pub fn get(&self, header: &str) -> Option<&'a CellValue> {
        self.headers
            .iter()
            .position(|h| h == header)
            .map(|idx| &self.cells[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a CellValue)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter())
    }
}

impl Sheet {
    /// Builds a sheet from raw header texts and data rows. Rows are padded
    /// with empty cells, or cut, to the number of headers.
    pub fn new<S: Into<String>>(name: S, headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn normalized_headers(&self) -> Vec<&str> {
        self.headers.iter().map(|h| normalize_header(h)).collect()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().filter(|_| !self.headers.is_empty()).map(|cells| Row {
            headers: &self.headers,
            cells,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Reads every sheet of the spreadsheet at `path` into memory. Cells equal
    /// to one of `na_values` are loaded as empty.
    pub fn open(path: &Path, na_values: &[String]) -> Result<Self> {
        debug!("Reading workbook: {}", path.display());
        let read_error = |reason: String| WorkbookReadError {
            file: path.display().to_string(),
            reason,
        };
        let mut workbook = open_workbook_auto(path).map_err(|e| read_error(e.to_string()))?;
        let mut sheets = Vec::new();
        for name in workbook.sheet_names() {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| read_error(format!("sheet '{}': {}", name, e)))?;
            let sheet = sheet_from_range(&name, &range, na_values);
            info!(
                "Loaded sheet '{}' with {} columns and {} rows",
                name,
                sheet.headers().len(),
                sheet.num_rows()
            );
            sheets.push(sheet);
        }
        Ok(Self { sheets })
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    pub fn push(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

fn sheet_from_range(name: &str, range: &Range<Data>, na_values: &[String]) -> Sheet {
    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|header| dedupe_headers(header.iter().map(|cell| cell.to_string())))
        .unwrap_or_default();
    let rows: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(|cell| cell_value(cell, na_values)).collect())
        .collect();
    Sheet::new(name, headers, rows)
}

/// Renames repeated headers the way pandas does: the second `note` becomes
/// `note.1`, the third `note.2`, skipping names already taken. Empty headers
/// are left alone.
fn dedupe_headers<I: IntoIterator<Item = String>>(headers: I) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    headers
        .into_iter()
        .map(|header| {
            if header.is_empty() {
                return header;
            }
            let mut name = header;
            let mut count = seen.get(&name).copied().unwrap_or(0);
            while count > 0 {
                seen.insert(name.clone(), count + 1);
                name = format!("{}.{}", name, count);
                count = seen.get(&name).copied().unwrap_or(0);
            }
            seen.insert(name.clone(), 1);
            name
        })
        .collect()
}

fn cell_value(data: &Data, na_values: &[String]) -> CellValue {
    let value = match data {
        Data::Empty => CellValue::Empty,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => whole_number(*f).map_or(CellValue::Float(*f), CellValue::Int),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) if dt.is_datetime() => dt
            .as_datetime()
            .map_or(CellValue::Float(dt.as_f64()), CellValue::DateTime),
        Data::DateTimeIso(s) => match Timestamp::parse_iso8601(s) {
            Some(Timestamp::Naive(dt)) => CellValue::DateTime(dt),
            _ => CellValue::Other(s.clone()),
        },
        // durations and error values
        other => CellValue::Other(other.to_string()),
    };
    if is_missing(&value, na_values) {
        CellValue::Empty
    } else {
        value
    }
}

// spreadsheets store every number as a float
fn whole_number(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
