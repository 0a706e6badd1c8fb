//! FILENAME: core/codegen/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    #[error("Table '{table}': no Rust identifier can be derived from '{name}'")]
    InvalidIdent { table: String, name: String },

    #[error("Table '{table}': fields '{first}' and '{second}' both map to `{ident}`")]
    IdentClash {
        table: String,
        first: String,
        second: String,
        ident: String,
    },

    #[error("Table '{table}': id type '{token}' has no id base type")]
    IllegalIdType { table: String, token: String },
}
