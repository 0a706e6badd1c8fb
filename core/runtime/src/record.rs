//! FILENAME: core/runtime/src/record.rs
//! PURPOSE: Traits implemented by every generated record type.

use codec::{DecodeError, RowReader};
use std::fmt::Debug;
use std::hash::Hash;

/// Anything keyed by an id.
pub trait Record {
    type Id: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    fn id(&self) -> Self::Id;
}

/// A record type compiled from one table. `decode` reads the id first and
/// then every other field in the table's declared column order.
pub trait DataRow: Record + Sized + Send + Sync + 'static {
    const TABLE_NAME: &'static str;

    fn decode(reader: &mut RowReader<'_>) -> Result<Self, DecodeError>;
}
