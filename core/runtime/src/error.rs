//! FILENAME: core/runtime/src/error.rs

use codec::DecodeError;
use std::path::PathBuf;
use thiserror::Error;

/// Why a table could not be loaded. Any of these leaves the previously
/// published table (if there was one) in place.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Table '{table}': payload truncated in record {record} (offset {offset}): {source}")]
    PayloadTruncated {
        table: String,
        record: usize,
        offset: usize,
        source: DecodeError,
    },

    #[error("Table '{table}': corrupt record {record} (offset {offset}): {source}")]
    Corrupt {
        table: String,
        record: usize,
        offset: usize,
        source: DecodeError,
    },

    #[error("Table '{table}': duplicate id {id} in record {record}")]
    DuplicateId {
        table: String,
        id: String,
        record: usize,
    },

    #[error("Table '{table}': cannot read {}: {source}", .path.display())]
    Io {
        table: String,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Table '{0}' is not registered")]
    NotRegistered(String),
}

impl LoadError {
    pub(crate) fn from_decode(table: &str, record: usize, offset: usize, source: DecodeError) -> Self {
        if source.is_truncated() {
            LoadError::PayloadTruncated {
                table: table.to_string(),
                record,
                offset,
                source,
            }
        } else {
            LoadError::Corrupt {
                table: table.to_string(),
                record,
                offset,
                source,
            }
        }
    }

    /// Name of the table that failed.
    pub fn table(&self) -> &str {
        match self {
            LoadError::PayloadTruncated { table, .. }
            | LoadError::Corrupt { table, .. }
            | LoadError::DuplicateId { table, .. }
            | LoadError::Io { table, .. } => table,
            LoadError::NotRegistered(table) => table,
        }
    }
}
