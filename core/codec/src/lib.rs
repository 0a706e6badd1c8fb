//! FILENAME: core/codec/src/lib.rs
//! PURPOSE: Library root for the Tabula field codecs.
//! CONTEXT: The one type-polymorphic piece shared by three consumers:
//!
//! PIPELINE: Header Token --> Registry --> FieldType --+--> Codegen (emit_*)
//!                                                     +--> Writer  (encode_cell)
//!                                                     +--> Runtime (RowReader / decode)
//!
//! WIRE FORMAT (little-endian):
//! - byte/short/int/long: signed 1/2/4/8 bytes
//! - bool: 1 byte, 0 or 1
//! - float/double: IEEE-754, 4/8 bytes
//! - char: one UTF-16 code unit, 2 bytes
//! - string: u32 byte count + UTF-8 bytes
//! - int[]: u32 count + count x i32
//! - int[][]: u32 count + count x int[]

pub mod cell;
pub mod error;
pub mod field_type;
pub mod reader;
pub mod registry;
pub mod value;


pub use cell::CellFormat;
pub use error::{CellError, DecodeError};
pub use field_type::{CodecSpec, EmitContext, FieldType};
pub use reader::RowReader;
pub use value::FieldValue;
