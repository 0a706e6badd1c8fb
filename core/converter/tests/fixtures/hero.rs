// Generated by tabula from table `Hero`. Do not edit.

use runtime::{DataRow, DecodeError, Record, RowReader};

/// Record type for the `Hero` table.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroRow {
    /// Hero id
    id: i32,
    /// Display name
    name: String,
    scores: Vec<i32>,
}

impl HeroRow {
    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scores(&self) -> &[i32] {
        &self.scores
    }
}

impl Record for HeroRow {
    type Id = i32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl DataRow for HeroRow {
    const TABLE_NAME: &'static str = "Hero";

    fn decode(reader: &mut RowReader<'_>) -> Result<Self, DecodeError> {
        let id = reader.read_i32()?;
        let name = reader.read_string()?;
        let scores = reader.read_i32_array()?;
        Ok(HeroRow { id, name, scores })
    }
}
