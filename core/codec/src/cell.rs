//! FILENAME: core/codec/src/cell.rs
//! PURPOSE: Turns raw cell text into typed values.
//! CONTEXT: The accepted bool words and the array separators are settings,
//! not guesses. `CellFormat::default()` documents the stock vocabulary:
//!
//! - inner separators: `,` and `|`   (`10,20,30`)
//! - outer separators: `;`           (`1,2;3,4` for `int[][]`)
//! - true words:  `1 true yes y`     (case-insensitive)
//! - false words: `0 false no n`     (case-insensitive)
//!
//! Array elements are trimmed and empty segments are skipped, so `10, 20,`
//! and `10,20` encode identically. An empty cell is an empty string or an
//! empty array; for every other type it is a cell error.

use crate::error::CellError;
use crate::field_type::FieldType;
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellFormat {
    /// Splits the elements of an `int[]` cell and of each `int[][]` group.
    pub separators: Vec<char>,
    /// Splits the groups of an `int[][]` cell.
    pub outer_separators: Vec<char>,
    pub true_words: Vec<String>,
    pub false_words: Vec<String>,
}

impl Default for CellFormat {
    fn default() -> Self {
        CellFormat {
            separators: vec![',', '|'],
            outer_separators: vec![';'],
            true_words: ["1", "true", "yes", "y"].map(String::from).to_vec(),
            false_words: ["0", "false", "no", "n"].map(String::from).to_vec(),
        }
    }
}

impl CellFormat {
    pub fn parse_bool(&self, text: &str) -> Option<bool> {
        let text = text.trim();
        if self.true_words.iter().any(|w| w.eq_ignore_ascii_case(text)) {
            Some(true)
        } else if self.false_words.iter().any(|w| w.eq_ignore_ascii_case(text)) {
            Some(false)
        } else {
            None
        }
    }

    pub fn split_elements<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        split_on(text, &self.separators)
    }

    pub fn split_groups<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        split_on(text, &self.outer_separators)
    }
}

fn split_on<'t>(text: &'t str, separators: &'t [char]) -> impl Iterator<Item = &'t str> + 't {
    text.split(move |c: char| separators.contains(&c))
        .map(str::trim)
        .filter(|part| !part.is_empty())
}

impl FieldType {
    pub fn parse_cell(self, text: &str, format: &CellFormat) -> Result<FieldValue, CellError> {
        let trimmed = text.trim();
        match self {
            FieldType::Byte => parse_int(trimmed, self).map(FieldValue::Byte),
            FieldType::Short => parse_int(trimmed, self).map(FieldValue::Short),
            FieldType::Int => parse_int(trimmed, self).map(FieldValue::Int),
            FieldType::Long => parse_int(trimmed, self).map(FieldValue::Long),
            // Strings keep their surrounding whitespace
            FieldType::String => Ok(FieldValue::String(text.to_string())),
            FieldType::Bool => {
                if trimmed.is_empty() {
                    return Err(CellError::Empty { expected: self.token() });
                }
                format
                    .parse_bool(trimmed)
                    .map(FieldValue::Bool)
                    .ok_or_else(|| CellError::InvalidBool {
                        text: trimmed.to_string(),
                    })
            }
            FieldType::Float => parse_float(trimmed, self).map(FieldValue::Float),
            FieldType::Double => parse_float(trimmed, self).map(FieldValue::Double),
            FieldType::Char => parse_char(text, trimmed).map(FieldValue::Char),
            FieldType::IntArray => parse_int_list(trimmed, format).map(FieldValue::IntArray),
            FieldType::IntArray2D => format
                .split_groups(trimmed)
                .map(|group| parse_int_list(group, format))
                .collect::<Result<Vec<_>, _>>()
                .map(FieldValue::IntArray2D),
        }
    }
}

fn parse_int<T>(text: &str, ty: FieldType) -> Result<T, CellError>
where
    T: FromStr<Err = ParseIntError>,
{
    if text.is_empty() {
        return Err(CellError::Empty { expected: ty.token() });
    }
    text.parse::<T>().map_err(|e| CellError::InvalidNumber {
        expected: ty.token(),
        text: text.to_string(),
        reason: e.to_string(),
    })
}

fn parse_float<T: FromStr>(text: &str, ty: FieldType) -> Result<T, CellError>
where
    T::Err: std::fmt::Display,
{
    if text.is_empty() {
        return Err(CellError::Empty { expected: ty.token() });
    }
    text.parse::<T>().map_err(|e| CellError::InvalidNumber {
        expected: ty.token(),
        text: text.to_string(),
        reason: e.to_string(),
    })
}

fn parse_int_list(text: &str, format: &CellFormat) -> Result<Vec<i32>, CellError> {
    format
        .split_elements(text)
        .map(|part| parse_int(part, FieldType::Int))
        .collect()
}

/// A lone whitespace character is a legitimate char cell, so only fall back
/// to the trimmed text when the raw text is longer than one character.
fn parse_char(raw: &str, trimmed: &str) -> Result<char, CellError> {
    let single = |s: &str| {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    };
    match single(raw).or_else(|| single(trimmed)) {
        Some(c) if u32::from(c) <= 0xFFFF => Ok(c),
        _ if raw.is_empty() => Err(CellError::Empty {
            expected: FieldType::Char.token(),
        }),
        _ => Err(CellError::InvalidChar {
            text: raw.to_string(),
        }),
    }
}
