//! FILENAME: core/runtime/src/dynamic.rs
//! PURPOSE: Decodes payloads from a list of column types instead of a
//! generated record type. Used for inspection tools and tests.

use crate::error::LoadError;
use crate::record::Record;
use crate::table::RowTable;
use codec::{registry, DecodeError, FieldType, FieldValue, RowReader};

/// A record whose fields are only known at run time. Ids widen to `i64`.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicRow {
    id: i64,
    values: Vec<FieldValue>,
}

impl DynamicRow {
    /// Non-id field values in layout order.
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    pub fn value(&self, index: usize) -> Option<&FieldValue> {
        self.values.get(index)
    }
}

impl Record for DynamicRow {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    id_type: FieldType,
    value_types: Vec<FieldType>,
}

impl RowLayout {
    /// `types` in layout order, id first. `None` when empty or when the
    /// first type cannot key a table.
    pub fn new(types: &[FieldType]) -> Option<Self> {
        let (&id_type, rest) = types.split_first()?;
        if !registry::is_legal_id(id_type) {
            return None;
        }
        Some(RowLayout {
            id_type,
            value_types: rest.to_vec(),
        })
    }

    pub fn value_types(&self) -> &[FieldType] {
        &self.value_types
    }

    pub fn decode_row(&self, reader: &mut RowReader<'_>) -> Result<DynamicRow, DecodeError> {
        // Every legal id type widens, so the default is never taken
        let id = self.id_type.decode(reader)?.as_id().unwrap_or_default();
        let values = self
            .value_types
            .iter()
            .map(|ty| ty.decode(reader))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DynamicRow { id, values })
    }

    pub fn decode_table(&self, name: &str, bytes: &[u8]) -> Result<RowTable<DynamicRow>, LoadError> {
        RowTable::decode_with(name, bytes, |reader| self.decode_row(reader))
    }
}
