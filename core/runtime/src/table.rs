//! FILENAME: core/runtime/src/table.rs
//! PURPOSE: The id-indexed, read-only collection built from one payload.
//! CONTEXT: A payload is a flat run of records with no header; decoding
//! continues until the buffer is exhausted. Any decode failure or repeated
//! id fails the whole table; no partially decoded table is ever returned.

use crate::error::LoadError;
use crate::record::{DataRow, Record};
use codec::{DecodeError, RowReader};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct RowTable<T: Record> {
    name: String,
    /// Records in payload order.
    rows: Vec<T>,
    index: FxHashMap<T::Id, usize>,
}

impl<T: Record> RowTable<T> {
    /// Decodes every record in `bytes` with `decode`.
    pub fn decode_with<F>(name: &str, bytes: &[u8], mut decode: F) -> Result<Self, LoadError>
    where
        F: FnMut(&mut RowReader<'_>) -> Result<T, DecodeError>,
    {
        let mut reader = RowReader::new(bytes);
        let mut rows = Vec::new();
        let mut index = FxHashMap::default();

        while !reader.is_empty() {
            let record = rows.len();
            let offset = reader.position();
            let row = decode(&mut reader)
                .map_err(|source| LoadError::from_decode(name, record, offset, source))?;

            match index.entry(row.id()) {
                Entry::Occupied(_) => {
                    return Err(LoadError::DuplicateId {
                        table: name.to_string(),
                        id: format!("{:?}", row.id()),
                        record,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
            }
            rows.push(row);
        }

        Ok(RowTable {
            name: name.to_string(),
            rows,
            index,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The only query primitive: the record with this id.
    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.index.get(&id).map(|&i| &self.rows[i])
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Records in the order they appear in the payload.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }
}

impl<T: DataRow> RowTable<T> {
    pub fn decode(bytes: &[u8]) -> Result<Self, LoadError> {
        Self::decode_with(T::TABLE_NAME, bytes, T::decode)
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            table: T::TABLE_NAME.to_string(),
            path: path.to_path_buf(),
            source,
        })?;
        Self::decode(&bytes)
    }
}
