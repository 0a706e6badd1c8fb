//! FILENAME: core/codec/src/reader.rs
//! PURPOSE: Forward-only cursor over an encoded payload.
//! CONTEXT: Generated record types call these `read_*` methods directly, and
//! `FieldType::decode` calls the very same methods, so the dynamic and the
//! generated decode paths share one implementation per wire type.

use crate::error::DecodeError;

/// Size of every count prefix (string byte length, array element count).
pub const LEN_PREFIX: usize = 4;

#[derive(Debug, Clone)]
pub struct RowReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> RowReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        RowReader { buf, pos: 0 }
    }

    /// Byte offset of the next read.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(DecodeError::Truncated {
                offset: self.pos,
                needed: n,
                remaining,
            });
        }
        let bytes = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let bytes = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Reads a count prefix and checks that at least `count * min_element`
    /// bytes follow, so a corrupt count cannot trigger a huge allocation.
    fn read_count(&mut self, min_element: usize) -> Result<usize, DecodeError> {
        let count = self.read_len()?;
        let needed = count.checked_mul(min_element).unwrap_or(usize::MAX);
        let remaining = self.remaining();
        if needed > remaining {
            return Err(DecodeError::Truncated {
                offset: self.pos,
                needed,
                remaining,
            });
        }
        Ok(count)
    }

    pub fn read_len(&mut self) -> Result<usize, DecodeError> {
        let raw = u32::from_le_bytes(self.take_array::<4>()?);
        Ok(raw as usize)
    }

    pub fn read_i8(&mut self) -> Result<i8, DecodeError> {
        Ok(i8::from_le_bytes(self.take_array::<1>()?))
    }

    pub fn read_i16(&mut self) -> Result<i16, DecodeError> {
        Ok(i16::from_le_bytes(self.take_array::<2>()?))
    }

    pub fn read_i32(&mut self) -> Result<i32, DecodeError> {
        Ok(i32::from_le_bytes(self.take_array::<4>()?))
    }

    pub fn read_i64(&mut self) -> Result<i64, DecodeError> {
        Ok(i64::from_le_bytes(self.take_array::<8>()?))
    }

    pub fn read_f32(&mut self) -> Result<f32, DecodeError> {
        Ok(f32::from_le_bytes(self.take_array::<4>()?))
    }

    pub fn read_f64(&mut self) -> Result<f64, DecodeError> {
        Ok(f64::from_le_bytes(self.take_array::<8>()?))
    }

    pub fn read_bool(&mut self) -> Result<bool, DecodeError> {
        let offset = self.pos;
        match self.take_array::<1>()?[0] {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(DecodeError::InvalidBool { offset, value }),
        }
    }

    pub fn read_char(&mut self) -> Result<char, DecodeError> {
        let offset = self.pos;
        let value = u16::from_le_bytes(self.take_array::<2>()?);
        char::from_u32(u32::from(value)).ok_or(DecodeError::InvalidChar { offset, value })
    }

    pub fn read_string(&mut self) -> Result<String, DecodeError> {
        let offset = self.pos;
        let len = self.read_len()?;
        let bytes = self.take(len)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| DecodeError::InvalidUtf8 { offset })
    }

    pub fn read_i32_array(&mut self) -> Result<Vec<i32>, DecodeError> {
        let count = self.read_count(4)?;
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.read_i32()?);
        }
        Ok(values)
    }

    pub fn read_i32_array_2d(&mut self) -> Result<Vec<Vec<i32>>, DecodeError> {
        // Every inner array carries at least its own count prefix
        let count = self.read_count(LEN_PREFIX)?;
        let mut groups = Vec::with_capacity(count);
        for _ in 0..count {
            groups.push(self.read_i32_array()?);
        }
        Ok(groups)
    }
}
