//! FILENAME: core/schema/src/lib.rs
//! Tabula Schema Module
//!
//! Turns source sheets into a `TableSchema` (ordered, typed fields) and the
//! `RawRow`s beneath it. Only this crate knows about spreadsheet files; the
//! code generator and binary writer consume the parsed result.

mod error;
mod reader;
mod source;
mod table;


pub use error::{SchemaError, SourceError};
pub use reader::read_table;
pub use source::{
    cell_text, is_source_file, load_sheet, load_sheets, SheetGrid, CSV_EXTENSION,
    WORKBOOK_EXTENSIONS,
};
pub use table::{FieldDescriptor, HeaderLayout, ParsedTable, RawRow, TableSchema};
