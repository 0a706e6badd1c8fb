//! FILENAME: core/runtime/src/handle.rs
//! PURPOSE: Holds the currently published table of one record type.
//! CONTEXT: Loading decodes into a fresh `RowTable` first and swaps it in
//! only on success, so readers see either the old table or the complete
//! new one. Readers hold an `Arc` and are never blocked by a reload.

use crate::error::LoadError;
use crate::record::DataRow;
use crate::table::RowTable;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug)]
pub struct TableHandle<T: DataRow> {
    current: RwLock<Option<Arc<RowTable<T>>>>,
}

impl<T: DataRow> Default for TableHandle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DataRow> TableHandle<T> {
    pub fn new() -> Self {
        TableHandle {
            current: RwLock::new(None),
        }
    }

    pub fn name(&self) -> &'static str {
        T::TABLE_NAME
    }

    /// Decodes `bytes` and publishes the result. Serves both the first load
    /// and every reload.
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<Arc<RowTable<T>>, LoadError> {
        let table = Arc::new(RowTable::<T>::decode(bytes)?);
        self.publish(Arc::clone(&table));
        Ok(table)
    }

    pub fn load_file(&self, path: &Path) -> Result<Arc<RowTable<T>>, LoadError> {
        let table = Arc::new(RowTable::<T>::load(path)?);
        self.publish(Arc::clone(&table));
        Ok(table)
    }

    fn publish(&self, table: Arc<RowTable<T>>) {
        let rows = table.len();
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(table);
        log::info!("Loaded table '{}' ({} records)", T::TABLE_NAME, rows);
    }

    /// Snapshot of the published table, `None` until the first good load.
    pub fn get(&self) -> Option<Arc<RowTable<T>>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn unload(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
