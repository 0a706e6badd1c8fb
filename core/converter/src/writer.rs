//! FILENAME: core/converter/src/writer.rs
//! PURPOSE: Encodes parsed rows into one table payload.
//! CONTEXT: Each row is the id cell followed by the remaining cells in
//! declared order, which is `TableSchema::fields()` order. The generated
//! decode routine walks the same list, so the two always agree.
//!
//! A cell that does not parse never aborts the table. It is recorded as a
//! `CellIssue` and the row is handled per `CellErrorPolicy`. A bad id cell
//! always drops the row: a defaulted key would collide with other rows.

use crate::config::CellErrorPolicy;
use codec::{CellError, CellFormat};
use schema::{RawRow, TableSchema};
use std::fmt;

/// One cell that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellIssue {
    /// One-based sheet row.
    pub line: usize,
    /// Zero-based sheet column.
    pub column: usize,
    pub field: String,
    pub text: String,
    pub error: CellError,
}

impl fmt::Display for CellIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}, column {} ({}): {}",
            self.line,
            column_letters(self.column),
            self.field,
            self.error
        )
    }
}

/// Spreadsheet column name for a zero-based index: 0 -> A, 26 -> AA.
pub fn column_letters(column: usize) -> String {
    let mut n = column + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedTable {
    pub payload: Vec<u8>,
    pub rows_written: usize,
    pub rows_skipped: usize,
    pub issues: Vec<CellIssue>,
}

impl EncodedTable {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Encodes every row of `rows` against `schema`.
pub fn encode_rows(
    schema: &TableSchema,
    rows: &[RawRow],
    format: &CellFormat,
    policy: CellErrorPolicy,
) -> EncodedTable {
    let mut table = EncodedTable::default();
    let mut scratch = Vec::new();

    for row in rows {
        scratch.clear();
        let outcome = encode_row(schema, row, format, policy, &mut scratch, &mut table.issues);

        if outcome != RowOutcome::Rejected {
            table.payload.extend_from_slice(&scratch);
            table.rows_written += 1;
        } else {
            table.rows_skipped += 1;
        }
    }

    table
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    Clean,
    /// Some value cells were replaced by their type's default.
    Defaulted,
    /// The row must not be published.
    Rejected,
}

/// Appends one row to `buf` and reports whether it may be published. Every
/// failing cell is pushed to `issues`, not only the first.
pub fn encode_row(
    schema: &TableSchema,
    row: &RawRow,
    format: &CellFormat,
    policy: CellErrorPolicy,
    buf: &mut Vec<u8>,
    issues: &mut Vec<CellIssue>,
) -> RowOutcome {
    let mut outcome = RowOutcome::Clean;

    for (field, text) in schema.fields().iter().zip(&row.cells) {
        if let Err(error) = field.field_type.encode_cell(buf, text, format) {
            issues.push(CellIssue {
                line: row.line,
                column: field.column,
                field: field.name.clone(),
                text: text.clone(),
                error,
            });
            if field.is_id || policy == CellErrorPolicy::SkipRow {
                outcome = RowOutcome::Rejected;
            } else if outcome == RowOutcome::Clean {
                outcome = RowOutcome::Defaulted;
            }
            if policy == CellErrorPolicy::DefaultValue {
                field.field_type.default_value().encode(buf);
            }
        }
    }

    outcome
}
