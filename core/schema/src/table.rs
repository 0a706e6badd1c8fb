//! FILENAME: core/schema/src/table.rs
//! PURPOSE: Table schema and raw row types produced by the schema reader.
//! CONTEXT: Field order is the binary layout order. The id field is always
//! the first field, so iterating `fields()` IS the encode/decode order.

use crate::error::SchemaError;
use codec::{registry, FieldType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    /// Token exactly as written in the header.
    pub type_token: String,
    pub field_type: FieldType,
    pub description: String,
    pub is_id: bool,
    /// Zero-based column in the source sheet.
    pub column: usize,
}

impl FieldDescriptor {
    /// Resolves `token` through the codec registry.
    pub fn resolve(
        table: &str,
        column: usize,
        name: &str,
        token: &str,
        description: &str,
        is_id: bool,
    ) -> Result<Self, SchemaError> {
        let field_type = registry::lookup(token).ok_or_else(|| SchemaError::UnknownType {
            table: table.to_string(),
            field: name.to_string(),
            column,
            token: token.trim().to_string(),
        })?;

        Ok(FieldDescriptor {
            name: name.trim().to_string(),
            type_token: token.trim().to_string(),
            field_type,
            description: description.trim().to_string(),
            is_id,
            column,
        })
    }
}

// ============================================================================
// TABLE SCHEMA
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    name: String,
    fields: Vec<FieldDescriptor>,
    source: PathBuf,
}

impl TableSchema {
    /// Validates the field list: at least one field, the first (and only
    /// the first) is the id, the id type may key a table, and no two field
    /// names collide case-insensitively.
    pub fn new(
        name: &str,
        fields: Vec<FieldDescriptor>,
        source: &Path,
    ) -> Result<Self, SchemaError> {
        let table = name.trim();
        if table.is_empty() || table.chars().any(|c| c.is_control() || c == '/' || c == '\\') {
            return Err(SchemaError::InvalidTableName {
                table: name.to_string(),
            });
        }

        let Some(id) = fields.first() else {
            return Err(SchemaError::EmptySchema {
                table: table.to_string(),
            });
        };

        if !id.is_id || fields[1..].iter().any(|f| f.is_id) {
            return Err(SchemaError::MisplacedId {
                table: table.to_string(),
            });
        }

        if !registry::is_legal_id(id.field_type) {
            return Err(SchemaError::IllegalIdType {
                table: table.to_string(),
                field: id.name.clone(),
                token: id.type_token.clone(),
            });
        }

        for (i, field) in fields.iter().enumerate() {
            let clash = fields[..i]
                .iter()
                .any(|earlier| earlier.name.eq_ignore_ascii_case(&field.name));
            if clash {
                return Err(SchemaError::DuplicateField {
                    table: table.to_string(),
                    field: field.name.clone(),
                });
            }
        }

        Ok(TableSchema {
            name: table.to_string(),
            fields,
            source: source.to_path_buf(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// All fields in layout order, id first.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn id_field(&self) -> &FieldDescriptor {
        &self.fields[0]
    }

    /// Every field except the id, in declared order.
    pub fn value_fields(&self) -> &[FieldDescriptor] {
        &self.fields[1..]
    }

    /// Column types in layout order.
    pub fn field_types(&self) -> Vec<FieldType> {
        self.fields.iter().map(|f| f.field_type).collect()
    }
}

// ============================================================================
// RAW ROW
// ============================================================================

/// Cell text of one data row, one entry per schema field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// One-based row number in the source sheet, for error reports.
    pub line: usize,
    pub cells: Vec<String>,
}

/// A successfully read sheet.
#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub schema: TableSchema,
    pub rows: Vec<RawRow>,
}

// ============================================================================
// HEADER LAYOUT
// ============================================================================

/// Which sheet rows hold the header block. Zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderLayout {
    pub name_row: usize,
    pub type_row: usize,
    pub description_row: Option<usize>,
    pub first_data_row: usize,
}

impl Default for HeaderLayout {
    fn default() -> Self {
        HeaderLayout {
            name_row: 0,
            type_row: 1,
            description_row: Some(2),
            first_data_row: 3,
        }
    }
}
