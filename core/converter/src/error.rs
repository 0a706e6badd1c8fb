//! FILENAME: core/converter/src/error.rs

use codegen::CodegenError;
use schema::{SchemaError, SourceError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// A failure that stops one table. Other tables in the same run carry on.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Table '{table}' is defined in both {} and {}", .first.display(), .second.display())]
    DuplicateTable {
        table: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Two tables whose generated module or type names coincide.
    #[error("Tables '{first}' and '{second}' both generate `{ident}`")]
    GeneratedNameClash {
        first: String,
        second: String,
        ident: String,
    },

    #[error("Table '{0}' not found under the source root")]
    TableNotFound(String),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| ConvertError::Io { path, source }
    }
}
