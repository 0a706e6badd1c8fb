//! FILENAME: core/converter/src/lib.rs
//! PURPOSE: Library root for the Tabula converter.
//! CONTEXT: Drives the offline half of the system:
//!
//! PIPELINE: source files --> schema::read_table --+--> codegen  --> <codegen_root>/<table>.rs
//!                                                 +--> writer   --> <output_root>/<Table>.<ext>
//!
//! Generated code and payload come from the same `TableSchema`, so the
//! decode order always matches the encode order.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod publish;
pub mod report;
pub mod writer;

pub use config::{CellErrorPolicy, ConverterConfig, DEFAULT_PAYLOAD_EXTENSION};
pub use error::{ConfigError, ConvertError};
pub use pipeline::{DataTableConverter, SheetConverter, MODULE_INDEX};
pub use publish::{write_atomic, write_if_changed};
pub use report::{ConversionReport, TableFailure, TableReport, TableStatus};
pub use writer::{encode_row, encode_rows, CellIssue, EncodedTable, RowOutcome};
