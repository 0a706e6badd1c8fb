//! FILENAME: core/runtime/src/lib.rs
//! Tabula runtime.
//!
//! Loads binary payloads into read-only tables keyed by id. Generated record
//! types implement `Record` and `DataRow`; everything they need is
//! re-exported from here so generated code depends on this crate alone.
//!
//! Layers:
//! - `record`: traits generated code implements
//! - `table`: decoding a payload into a `RowTable`
//! - `handle`: the published table for one type, swapped atomically on reload
//! - `registry`: many handles, loaded from one payload directory
//! - `dynamic`: schema-driven decoding without generated code

pub mod dynamic;
pub mod error;
pub mod handle;
pub mod record;
pub mod registry;
pub mod table;

pub use codec::{DecodeError, FieldType, FieldValue, RowReader};
pub use dynamic::{DynamicRow, RowLayout};
pub use error::LoadError;
pub use handle::TableHandle;
pub use record::{DataRow, Record};
pub use registry::{LoadSummary, TableRegistry, DEFAULT_PAYLOAD_EXTENSION};
pub use table::RowTable;
