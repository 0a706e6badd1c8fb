//! FILENAME: core/schema/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Failure opening or reading a source file.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook read error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unsupported source file: {}", .0.display())]
    Unsupported(PathBuf),

    #[error("Sheet '{sheet}' not found in {}", .path.display())]
    SheetNotFound { sheet: String, path: PathBuf },
}

/// A header block that cannot describe a table. Fatal for that table only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Table '{table}': header row {row} is missing")]
    MissingHeader { table: String, row: usize },

    #[error("Table '{table}': no fields declared")]
    EmptySchema { table: String },

    #[error("Table '{table}': invalid table name")]
    InvalidTableName { table: String },

    #[error("Table '{table}': column {column} ('{field}') has unknown type '{token}'")]
    UnknownType {
        table: String,
        field: String,
        column: usize,
        token: String,
    },

    #[error("Table '{table}': duplicate field '{field}'")]
    DuplicateField { table: String, field: String },

    #[error("Table '{table}': id field '{field}' has type '{token}', which cannot key a table")]
    IllegalIdType {
        table: String,
        field: String,
        token: String,
    },

    #[error("Table '{table}': the id field must be the first field")]
    MisplacedId { table: String },
}
