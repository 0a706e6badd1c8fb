// Generated by tabula from table `Book`. Do not edit.

use runtime::{DataRow, DecodeError, Record, RowReader};

/// Record type for the `Book` table.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRow {
    /// Book id
    id: i32,
    reader_: i32,
    pages: i32,
}

impl BookRow {
    pub fn reader_(&self) -> i32 {
        self.reader_
    }

    pub fn pages(&self) -> i32 {
        self.pages
    }
}

impl Record for BookRow {
    type Id = i32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl DataRow for BookRow {
    const TABLE_NAME: &'static str = "Book";

    fn decode(reader: &mut RowReader<'_>) -> Result<Self, DecodeError> {
        let id = reader.read_i32()?;
        let reader_ = reader.read_i32()?;
        let pages = reader.read_i32()?;
        Ok(BookRow { id, reader_, pages })
    }
}
