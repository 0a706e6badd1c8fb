//! FILENAME: core/converter/src/report.rs
//! PURPOSE: What a conversion run did, table by table.

use crate::error::ConvertError;
use crate::writer::CellIssue;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Succeeded,
    /// Published, but some cells did not convert.
    CellErrors,
    Failed,
}

/// A table whose payload was published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    pub table: String,
    pub source: PathBuf,
    pub payload: PathBuf,
    pub generated: Option<PathBuf>,
    pub rows_written: usize,
    pub rows_skipped: usize,
    pub bytes: usize,
    pub issues: Vec<CellIssue>,
}

impl TableReport {
    pub fn status(&self) -> TableStatus {
        if self.issues.is_empty() {
            TableStatus::Succeeded
        } else {
            TableStatus::CellErrors
        }
    }
}

/// A table that produced no output.
#[derive(Debug)]
pub struct TableFailure {
    pub table: String,
    pub source: Option<PathBuf>,
    pub error: ConvertError,
}

#[derive(Debug, Default)]
pub struct ConversionReport {
    pub converted: Vec<TableReport>,
    pub failed: Vec<TableFailure>,
}

impl ConversionReport {
    /// Orders both lists by table name so reports compare across runs.
    pub fn sort(&mut self) {
        self.converted.sort_by(|a, b| a.table.cmp(&b.table));
        self.failed.sort_by(|a, b| a.table.cmp(&b.table));
    }

    pub fn succeeded(&self) -> usize {
        self.count(TableStatus::Succeeded)
    }

    pub fn with_cell_errors(&self) -> usize {
        self.count(TableStatus::CellErrors)
    }

    fn count(&self, status: TableStatus) -> usize {
        self.converted.iter().filter(|t| t.status() == status).count()
    }

    /// True when no table fatally failed. Cell errors do not count.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn table(&self, name: &str) -> Option<&TableReport> {
        self.converted.iter().find(|t| t.table == name)
    }

    pub fn failure(&self, name: &str) -> Option<&TableFailure> {
        self.failed.iter().find(|t| t.table == name)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} tables: {} succeeded, {} with cell errors, {} failed",
            self.converted.len() + self.failed.len(),
            self.succeeded(),
            self.with_cell_errors(),
            self.failed.len()
        )
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for table in &self.converted {
            writeln!(
                f,
                "[ok] {}: {} rows, {} bytes -> {}",
                table.table,
                table.rows_written,
                table.bytes,
                table.payload.display()
            )?;
            if table.rows_skipped > 0 {
                writeln!(f, "     {} rows skipped", table.rows_skipped)?;
            }
            for issue in &table.issues {
                writeln!(f, "     {}", issue)?;
            }
        }
        for failure in &self.failed {
            writeln!(f, "[failed] {}: {}", failure.table, failure.error)?;
        }
        write!(f, "{}", self.summary())
    }
}
