//! FILENAME: core/codec/src/value.rs
//! PURPOSE: Typed cell values and their binary encoding.

use crate::error::CellError;
use crate::field_type::FieldType;
use std::fmt;

/// Substituted for characters outside the basic multilingual plane, which
/// a single UTF-16 code unit cannot hold. `parse_cell` never produces them.
const REPLACEMENT_UNIT: u16 = 0xFFFD;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    String(String),
    Bool(bool),
    Float(f32),
    Double(f64),
    Char(char),
    IntArray(Vec<i32>),
    IntArray2D(Vec<Vec<i32>>),
}

impl FieldValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Byte(_) => FieldType::Byte,
            FieldValue::Short(_) => FieldType::Short,
            FieldValue::Int(_) => FieldType::Int,
            FieldValue::Long(_) => FieldType::Long,
            FieldValue::String(_) => FieldType::String,
            FieldValue::Bool(_) => FieldType::Bool,
            FieldValue::Float(_) => FieldType::Float,
            FieldValue::Double(_) => FieldType::Double,
            FieldValue::Char(_) => FieldType::Char,
            FieldValue::IntArray(_) => FieldType::IntArray,
            FieldValue::IntArray2D(_) => FieldType::IntArray2D,
        }
    }

    /// Appends the little-endian wire form of this value.
    pub fn encode(&self, buf: &mut Vec<u8>) {
        match self {
            FieldValue::Byte(v) => buf.extend_from_slice(&v.to_le_bytes()),
            FieldValue::Short(v) => buf.extend_from_slice(&v.to_le_bytes()),
            FieldValue::Int(v) => buf.extend_from_slice(&v.to_le_bytes()),
            FieldValue::Long(v) => buf.extend_from_slice(&v.to_le_bytes()),
            FieldValue::String(s) => {
                put_len(buf, s.len());
                buf.extend_from_slice(s.as_bytes());
            }
            FieldValue::Bool(b) => buf.push(u8::from(*b)),
            FieldValue::Float(v) => buf.extend_from_slice(&v.to_le_bytes()),
            FieldValue::Double(v) => buf.extend_from_slice(&v.to_le_bytes()),
            FieldValue::Char(c) => {
                let unit = u16::try_from(u32::from(*c)).unwrap_or(REPLACEMENT_UNIT);
                buf.extend_from_slice(&unit.to_le_bytes());
            }
            FieldValue::IntArray(values) => put_i32_array(buf, values),
            FieldValue::IntArray2D(groups) => {
                put_len(buf, groups.len());
                for group in groups {
                    put_i32_array(buf, group);
                }
            }
        }
    }

    /// Fails when a string or array is too long for its `u32` length prefix.
    /// `encode` assumes this holds.
    pub fn check_lengths(&self) -> Result<(), CellError> {
        let expected = self.field_type().token();
        match self {
            FieldValue::String(s) => check_len(expected, s.len()),
            FieldValue::IntArray(values) => check_len(expected, values.len()),
            FieldValue::IntArray2D(groups) => {
                check_len(expected, groups.len())?;
                groups
                    .iter()
                    .try_for_each(|group| check_len(expected, group.len()))
            }
            _ => Ok(()),
        }
    }

    /// Integer ids widened to `i64`; `None` for non-integer values.
    pub fn as_id(&self) -> Option<i64> {
        match self {
            FieldValue::Byte(v) => Some(i64::from(*v)),
            FieldValue::Short(v) => Some(i64::from(*v)),
            FieldValue::Int(v) => Some(i64::from(*v)),
            FieldValue::Long(v) => Some(*v),
            _ => None,
        }
    }
}

pub(crate) fn check_len(expected: &'static str, len: usize) -> Result<(), CellError> {
    if u32::try_from(len).is_ok() {
        Ok(())
    } else {
        Err(CellError::TooLong { expected, len })
    }
}

fn put_len(buf: &mut Vec<u8>, len: usize) {
    let len = u32::try_from(len).unwrap_or(u32::MAX);
    buf.extend_from_slice(&len.to_le_bytes());
}

fn put_i32_array(buf: &mut Vec<u8>, values: &[i32]) {
    put_len(buf, values.len());
    for v in values {
        buf.extend_from_slice(&v.to_le_bytes());
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Byte(v) => write!(f, "{}", v),
            FieldValue::Short(v) => write!(f, "{}", v),
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Long(v) => write!(f, "{}", v),
            FieldValue::String(s) => write!(f, "{:?}", s),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Double(v) => write!(f, "{}", v),
            FieldValue::Char(c) => write!(f, "{:?}", c),
            FieldValue::IntArray(values) => write!(f, "{:?}", values),
            FieldValue::IntArray2D(groups) => write!(f, "{:?}", groups),
        }
    }
}
