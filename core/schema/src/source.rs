//! FILENAME: core/schema/src/source.rs
//! PURPOSE: Loads source files into plain text grids.
//! CONTEXT: Workbooks go through calamine (xlsx, xlsm, xlsb, xls, ods); each
//! visible sheet is one table. A CSV file is a single table named after the
//! file stem. Sheets whose name starts with '#' or '_' are notes/metadata
//! and are skipped.

use crate::error::SourceError;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::{Path, PathBuf};

pub const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];
pub const CSV_EXTENSION: &str = "csv";

/// Cell text of one sheet, addressed by absolute (row, column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetGrid {
    pub name: String,
    pub source: PathBuf,
    pub rows: Vec<Vec<String>>,
}

impl SheetGrid {
    /// Builds a grid from literal rows. Handy for tests and generated input.
    pub fn from_rows(name: &str, rows: Vec<Vec<&str>>) -> Self {
        SheetGrid {
            name: name.to_string(),
            source: PathBuf::from(format!("{}.memory", name)),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect())
                .collect(),
        }
    }

    /// Text at (row, col); missing cells read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

pub fn is_source_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('~') || n.starts_with('.'));
    if hidden {
        return false;
    }
    match extension_of(path) {
        Some(ext) => ext == CSV_EXTENSION || WORKBOOK_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}

fn is_ignored_sheet(name: &str) -> bool {
    name.starts_with('#') || name.starts_with('_')
}

/// Loads every table sheet in `path`.
pub fn load_sheets(path: &Path) -> Result<Vec<SheetGrid>, SourceError> {
    match extension_of(path) {
        Some(ext) if ext == CSV_EXTENSION => Ok(vec![load_csv(path)?]),
        Some(ext) if WORKBOOK_EXTENSIONS.contains(&ext.as_str()) => load_workbook(path),
        _ => Err(SourceError::Unsupported(path.to_path_buf())),
    }
}

/// Loads the single sheet called `table` from `path`.
pub fn load_sheet(path: &Path, table: &str) -> Result<SheetGrid, SourceError> {
    load_sheets(path)?
        .into_iter()
        .find(|sheet| sheet.name == table)
        .ok_or_else(|| SourceError::SheetNotFound {
            sheet: table.to_string(),
            path: path.to_path_buf(),
        })
}

fn load_workbook(path: &Path) -> Result<Vec<SheetGrid>, SourceError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_vec();

    let mut sheets = Vec::new();
    for sheet_name in sheet_names.iter().filter(|n| !is_ignored_sheet(n)) {
        let range = workbook.worksheet_range(sheet_name)?;

        // A range begins at its first used cell; pad so that grid
        // coordinates match the sheet's own.
        let (start_row, start_col) = range.start().unwrap_or((0, 0));
        let mut rows: Vec<Vec<String>> = vec![Vec::new(); start_row as usize];
        for row in range.rows() {
            let mut cells = vec![String::new(); start_col as usize];
            cells.extend(row.iter().map(cell_text));
            rows.push(cells);
        }

        sheets.push(SheetGrid {
            name: sheet_name.clone(),
            source: path.to_path_buf(),
            rows,
        });
    }

    Ok(sheets)
}

fn load_csv(path: &Path) -> Result<SheetGrid, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    // The csv reader skips blank lines; put them back so that grid rows
    // line up with file lines and the header block keeps its shape.
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(position) = record.position() {
            let index = (position.line() as usize).saturating_sub(1);
            if rows.len() < index {
                rows.resize(index, Vec::new());
            }
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();

    Ok(SheetGrid {
        name,
        source: path.to_path_buf(),
        rows,
    })
}

/// Renders a workbook cell the way a person typed it. Integral numbers lose
/// their fractional part so that `10` stays `10` and parses as an int.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => format_number(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#{:?}", e),
        Data::DateTime(dt) => format_number(dt.as_f64()),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}
