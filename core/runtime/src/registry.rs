//! FILENAME: core/runtime/src/registry.rs
//! PURPOSE: One handle per registered record type, loaded from a directory.
//! CONTEXT: Tables are independent. A table that fails to load is reported
//! in the `LoadSummary` and stays unavailable (or keeps its previous
//! contents); the others remain usable.

use crate::error::LoadError;
use crate::handle::TableHandle;
use crate::record::DataRow;
use crate::table::RowTable;
use std::any::Any;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const DEFAULT_PAYLOAD_EXTENSION: &str = "bytes";

/// Object-safe view of a `TableHandle<T>`.
trait ErasedTable: Send + Sync {
    fn load_bytes(&self, bytes: &[u8]) -> Result<usize, LoadError>;
    fn is_loaded(&self) -> bool;
    fn as_any(&self) -> &dyn Any;
}

impl<T: DataRow> ErasedTable for TableHandle<T> {
    fn load_bytes(&self, bytes: &[u8]) -> Result<usize, LoadError> {
        TableHandle::load_bytes(self, bytes).map(|table| table.len())
    }

    fn is_loaded(&self) -> bool {
        TableHandle::is_loaded(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Outcome of `TableRegistry::load_dir`.
#[derive(Debug, Default)]
pub struct LoadSummary {
    /// (table, record count)
    pub loaded: Vec<(String, usize)>,
    pub failed: Vec<LoadError>,
}

impl LoadSummary {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct TableRegistry {
    tables: BTreeMap<&'static str, Box<dyn ErasedTable>>,
    extension: String,
}

impl std::fmt::Debug for TableRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableRegistry")
            .field("tables", &self.tables.keys().collect::<Vec<_>>())
            .field("extension", &self.extension)
            .finish()
    }
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRegistry {
    pub fn new() -> Self {
        Self::with_extension(DEFAULT_PAYLOAD_EXTENSION)
    }

    /// Payload files are looked up as `<dir>/<table>.<extension>`.
    pub fn with_extension(extension: &str) -> Self {
        TableRegistry {
            tables: BTreeMap::new(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Registers `T`. Registering the same table name again replaces the
    /// earlier handle.
    pub fn register<T: DataRow>(&mut self) -> &mut Self {
        let previous = self
            .tables
            .insert(T::TABLE_NAME, Box::new(TableHandle::<T>::new()));
        if previous.is_some() {
            log::warn!("Table '{}' registered twice; keeping the latest", T::TABLE_NAME);
        }
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tables.keys().copied()
    }

    pub fn handle<T: DataRow>(&self) -> Option<&TableHandle<T>> {
        self.tables
            .get(T::TABLE_NAME)
            .and_then(|table| table.as_any().downcast_ref::<TableHandle<T>>())
    }

    /// Snapshot of the loaded table for `T`.
    pub fn table<T: DataRow>(&self) -> Option<Arc<RowTable<T>>> {
        self.handle::<T>().and_then(TableHandle::get)
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.tables.get(name).is_some_and(|table| table.is_loaded())
    }

    /// Loads (or reloads) the table called `name` from `bytes`, returning
    /// its record count.
    pub fn load_bytes(&self, name: &str, bytes: &[u8]) -> Result<usize, LoadError> {
        self.tables
            .get(name)
            .ok_or_else(|| LoadError::NotRegistered(name.to_string()))?
            .load_bytes(bytes)
    }

    pub fn payload_path(&self, dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{}.{}", name, self.extension))
    }

    /// Loads every registered table from `dir`.
    pub fn load_dir(&self, dir: &Path) -> LoadSummary {
        let mut summary = LoadSummary::default();

        for (&name, table) in &self.tables {
            let path = self.payload_path(dir, name);
            let result = std::fs::read(&path)
                .map_err(|source| LoadError::Io {
                    table: name.to_string(),
                    path: path.clone(),
                    source,
                })
                .and_then(|bytes| table.load_bytes(&bytes));

            match result {
                Ok(rows) => summary.loaded.push((name.to_string(), rows)),
                Err(err) => {
                    log::warn!("Table '{}' failed to load: {}", name, err);
                    summary.failed.push(err);
                }
            }
        }

        summary
    }
}
