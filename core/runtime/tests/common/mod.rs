//! FILENAME: core/runtime/tests/common/mod.rs
//! Hand-written record types shaped exactly like generated ones.

use runtime::{DataRow, DecodeError, Record, RowReader};

#[derive(Debug, Clone, PartialEq)]
pub struct HeroRow {
    id: i32,
    name: String,
    scores: Vec<i32>,
}

impl HeroRow {
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

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    id: i64,
    weight: f32,
}

impl ItemRow {
    pub fn weight(&self) -> f32 {
        self.weight
    }
}

impl Record for ItemRow {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl DataRow for ItemRow {
    const TABLE_NAME: &'static str = "Item";

    fn decode(reader: &mut RowReader<'_>) -> Result<Self, DecodeError> {
        let id = reader.read_i64()?;
        let weight = reader.read_f32()?;
        Ok(ItemRow { id, weight })
    }
}

/// Encodes one Hero record the way the converter does.
pub fn hero_bytes(id: i32, name: &str, scores: &[i32]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&id.to_le_bytes());
    buf.extend_from_slice(&(name.len() as u32).to_le_bytes());
    buf.extend_from_slice(name.as_bytes());
    buf.extend_from_slice(&(scores.len() as u32).to_le_bytes());
    for s in scores {
        buf.extend_from_slice(&s.to_le_bytes());
    }
    buf
}

pub fn item_bytes(id: i64, weight: f32) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&id.to_le_bytes());
    buf.extend_from_slice(&weight.to_le_bytes());
    buf
}
