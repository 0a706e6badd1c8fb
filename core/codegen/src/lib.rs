//! FILENAME: core/codegen/src/lib.rs
//! PURPOSE: Library root for the Tabula code generator.
//! CONTEXT: Schema in, Rust source text out. Writing the text to disk is the
//! converter's job.
//!
//! PIPELINE: TableSchema --> decode_plan --> generate_record --> GeneratedSource

pub mod error;
pub mod naming;
pub mod record;

#[cfg(test)]
mod tests;

pub use error::CodegenError;
pub use record::{
    decode_plan, generate_module_index, generate_record, CodegenOptions, DecodeStep,
    GeneratedSource, ID_IDENT,
};
