//! FILENAME: core/codec/src/error.rs

use thiserror::Error;

/// A cell whose text does not parse as its column's declared type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    #[error("empty cell where a {expected} value is required")]
    Empty { expected: &'static str },

    #[error("'{text}' is not a valid {expected}: {reason}")]
    InvalidNumber {
        expected: &'static str,
        text: String,
        reason: String,
    },

    #[error("'{text}' is not a recognised bool word")]
    InvalidBool { text: String },

    #[error("'{text}' is not a single character from the basic multilingual plane")]
    InvalidChar { text: String },

    #[error("{expected} of length {len} exceeds the u32 length prefix")]
    TooLong { expected: &'static str, len: usize },
}

/// Failure while reading encoded bytes back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("payload truncated at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("invalid bool byte {value:#04x} at offset {offset}")]
    InvalidBool { offset: usize, value: u8 },

    #[error("invalid UTF-16 code unit {value:#06x} at offset {offset}")]
    InvalidChar { offset: usize, value: u16 },

    #[error("string at offset {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize },
}

impl DecodeError {
    /// True when the reader ran out of bytes, as opposed to reading garbage.
    pub fn is_truncated(&self) -> bool {
        matches!(self, DecodeError::Truncated { .. })
    }
}
