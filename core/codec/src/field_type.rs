//! FILENAME: core/codec/src/field_type.rs
//! PURPOSE: The closed set of column types and their per-variant codec table.
//! CONTEXT: Code generation, binary writing and runtime reading all dispatch
//! through `FieldType`. Each variant owns exactly one `CodecSpec` row plus one
//! arm in `parse_cell` (cell.rs), `FieldValue::encode` (value.rs) and
//! `decode` below. Adding a column type means touching those four places and
//! the registry table; nothing outside this crate changes.

use crate::cell::CellFormat;
use crate::error::{CellError, DecodeError};
use crate::reader::RowReader;
use crate::value::FieldValue;

// ============================================================================
// FIELD TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Byte,
    Short,
    Int,
    Long,
    String,
    Bool,
    Float,
    Double,
    Char,
    IntArray,
    IntArray2D,
}

// ============================================================================
// CODEC TABLE
// ============================================================================

/// Static facts about one field type, shared by every consumer.
#[derive(Debug)]
pub struct CodecSpec {
    /// Canonical type token as written in a sheet header.
    pub token: &'static str,
    /// Rust type of the generated struct field.
    pub rust_type: &'static str,
    /// Return type of the generated accessor.
    pub accessor_type: &'static str,
    /// Whether the accessor hands out a borrow instead of a copy.
    pub borrowed: bool,
    /// `RowReader` method the generated decode routine calls.
    pub read_method: &'static str,
    /// Encoded width when it does not depend on the value.
    pub fixed_width: Option<usize>,
    /// Associated `Id` type when this type may key a table.
    pub id_type: Option<&'static str>,
}

const BYTE: CodecSpec = CodecSpec {
    token: "byte",
    rust_type: "i8",
    accessor_type: "i8",
    borrowed: false,
    read_method: "read_i8",
    fixed_width: Some(1),
    id_type: Some("i8"),
};

const SHORT: CodecSpec = CodecSpec {
    token: "short",
    rust_type: "i16",
    accessor_type: "i16",
    borrowed: false,
    read_method: "read_i16",
    fixed_width: Some(2),
    id_type: Some("i16"),
};

const INT: CodecSpec = CodecSpec {
    token: "int",
    rust_type: "i32",
    accessor_type: "i32",
    borrowed: false,
    read_method: "read_i32",
    fixed_width: Some(4),
    id_type: Some("i32"),
};

const LONG: CodecSpec = CodecSpec {
    token: "long",
    rust_type: "i64",
    accessor_type: "i64",
    borrowed: false,
    read_method: "read_i64",
    fixed_width: Some(8),
    id_type: Some("i64"),
};

const STRING: CodecSpec = CodecSpec {
    token: "string",
    rust_type: "String",
    accessor_type: "&str",
    borrowed: true,
    read_method: "read_string",
    fixed_width: None,
    id_type: None,
};

const BOOL: CodecSpec = CodecSpec {
    token: "bool",
    rust_type: "bool",
    accessor_type: "bool",
    borrowed: false,
    read_method: "read_bool",
    fixed_width: Some(1),
    id_type: None,
};

const FLOAT: CodecSpec = CodecSpec {
    token: "float",
    rust_type: "f32",
    accessor_type: "f32",
    borrowed: false,
    read_method: "read_f32",
    fixed_width: Some(4),
    id_type: None,
};

const DOUBLE: CodecSpec = CodecSpec {
    token: "double",
    rust_type: "f64",
    accessor_type: "f64",
    borrowed: false,
    read_method: "read_f64",
    fixed_width: Some(8),
    id_type: None,
};

const CHAR: CodecSpec = CodecSpec {
    token: "char",
    rust_type: "char",
    accessor_type: "char",
    borrowed: false,
    read_method: "read_char",
    fixed_width: Some(2),
    id_type: None,
};

const INT_ARRAY: CodecSpec = CodecSpec {
    token: "int[]",
    rust_type: "Vec<i32>",
    accessor_type: "&[i32]",
    borrowed: true,
    read_method: "read_i32_array",
    fixed_width: None,
    id_type: None,
};

const INT_ARRAY_2D: CodecSpec = CodecSpec {
    token: "int[][]",
    rust_type: "Vec<Vec<i32>>",
    accessor_type: "&[Vec<i32>]",
    borrowed: true,
    read_method: "read_i32_array_2d",
    fixed_width: None,
    id_type: None,
};

// ============================================================================
// EMIT CONTEXT
// ============================================================================

/// What a field's source fragments need to know about the column.
#[derive(Debug, Clone, Copy)]
pub struct EmitContext<'a> {
    /// Already-sanitised Rust identifier.
    pub ident: &'a str,
    /// Human description from the sheet header, may be empty.
    pub description: &'a str,
    /// Indentation prefix for every emitted line.
    pub indent: &'a str,
}

impl FieldType {
    pub const ALL: [FieldType; 11] = [
        FieldType::Byte,
        FieldType::Short,
        FieldType::Int,
        FieldType::Long,
        FieldType::String,
        FieldType::Bool,
        FieldType::Float,
        FieldType::Double,
        FieldType::Char,
        FieldType::IntArray,
        FieldType::IntArray2D,
    ];

    pub fn spec(self) -> &'static CodecSpec {
        match self {
            FieldType::Byte => &BYTE,
            FieldType::Short => &SHORT,
            FieldType::Int => &INT,
            FieldType::Long => &LONG,
            FieldType::String => &STRING,
            FieldType::Bool => &BOOL,
            FieldType::Float => &FLOAT,
            FieldType::Double => &DOUBLE,
            FieldType::Char => &CHAR,
            FieldType::IntArray => &INT_ARRAY,
            FieldType::IntArray2D => &INT_ARRAY_2D,
        }
    }

    pub fn token(self) -> &'static str {
        self.spec().token
    }

    pub fn rust_type(self) -> &'static str {
        self.spec().rust_type
    }

    /// The `Id` type a generated record declares when this type keys the
    /// table. `None` for types that cannot be an id.
    pub fn resolve_id_base_type(self) -> Option<&'static str> {
        self.spec().id_type
    }

    /// Appends the struct field declaration, preceded by the description
    /// as a doc comment.
    pub fn emit_field_declaration(self, out: &mut String, ctx: &EmitContext<'_>) {
        emit_doc(out, ctx);
        out.push_str(&format!("{}{}: {},\n", ctx.indent, ctx.ident, self.rust_type()));
    }

    /// Appends `let <ident> = reader.<read_method>()?;`.
    pub fn emit_decode_statement(self, out: &mut String, ctx: &EmitContext<'_>) {
        out.push_str(&format!(
            "{}let {} = reader.{}()?;\n",
            ctx.indent,
            ctx.ident,
            self.spec().read_method
        ));
    }

    /// Appends a getter returning the field by value or by borrow.
    pub fn emit_accessor(self, out: &mut String, ctx: &EmitContext<'_>) {
        let spec = self.spec();
        let body = if spec.borrowed {
            format!("&self.{}", ctx.ident)
        } else {
            format!("self.{}", ctx.ident)
        };
        emit_doc(out, ctx);
        out.push_str(&format!(
            "{indent}pub fn {name}(&self) -> {ty} {{\n{indent}    {body}\n{indent}}}\n",
            indent = ctx.indent,
            name = ctx.ident,
            ty = spec.accessor_type,
            body = body,
        ));
    }

    /// Parses `text` and appends its encoding to `buf`, returning the number
    /// of bytes written. On error nothing is appended.
    pub fn encode_cell(
        self,
        buf: &mut Vec<u8>,
        text: &str,
        format: &CellFormat,
    ) -> Result<usize, CellError> {
        let value = self.parse_cell(text, format)?;
        value.check_lengths()?;
        let start = buf.len();
        value.encode(buf);
        Ok(buf.len() - start)
    }

    pub fn decode(self, reader: &mut RowReader<'_>) -> Result<FieldValue, DecodeError> {
        Ok(match self {
            FieldType::Byte => FieldValue::Byte(reader.read_i8()?),
            FieldType::Short => FieldValue::Short(reader.read_i16()?),
            FieldType::Int => FieldValue::Int(reader.read_i32()?),
            FieldType::Long => FieldValue::Long(reader.read_i64()?),
            FieldType::String => FieldValue::String(reader.read_string()?),
            FieldType::Bool => FieldValue::Bool(reader.read_bool()?),
            FieldType::Float => FieldValue::Float(reader.read_f32()?),
            FieldType::Double => FieldValue::Double(reader.read_f64()?),
            FieldType::Char => FieldValue::Char(reader.read_char()?),
            FieldType::IntArray => FieldValue::IntArray(reader.read_i32_array()?),
            FieldType::IntArray2D => FieldValue::IntArray2D(reader.read_i32_array_2d()?),
        })
    }

    /// Zero value written in place of an unparsable cell when the converter
    /// runs with the default-value policy.
    pub fn default_value(self) -> FieldValue {
        match self {
            FieldType::Byte => FieldValue::Byte(0),
            FieldType::Short => FieldValue::Short(0),
            FieldType::Int => FieldValue::Int(0),
            FieldType::Long => FieldValue::Long(0),
            FieldType::String => FieldValue::String(String::new()),
            FieldType::Bool => FieldValue::Bool(false),
            FieldType::Float => FieldValue::Float(0.0),
            FieldType::Double => FieldValue::Double(0.0),
            FieldType::Char => FieldValue::Char('\0'),
            FieldType::IntArray => FieldValue::IntArray(Vec::new()),
            FieldType::IntArray2D => FieldValue::IntArray2D(Vec::new()),
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

fn emit_doc(out: &mut String, ctx: &EmitContext<'_>) {
    for line in ctx.description.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        out.push_str(&format!("{}/// {}\n", ctx.indent, line));
    }
}
