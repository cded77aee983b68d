// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Read cursor over an immutable OPC UA binary buffer.
//!
//! All multi-byte values are little-endian and unaligned. Every read checks
//! the remaining length first and fails with
//! [`CodecError::TruncatedInput`] at the exact position it stopped, so a
//! decoder never observes a partially read field.

use byteorder::{ByteOrder, LittleEndian};

use crate::config::DecodingOptions;
use crate::core::{CodecError, Result};

/// Cursor that tracks the read position in a borrowed buffer.
///
/// # Example
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use uacodec::encoding::ReadCursor;
///
/// let data = [0x2a, 0x00, 0x00, 0x00, 0x01];
/// let mut cursor = ReadCursor::new(&data);
/// assert_eq!(cursor.read_u32()?, 42);
/// assert_eq!(cursor.position(), 4);
/// assert!(cursor.read_u16().is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReadCursor<'a> {
    data: &'a [u8],
    offset: usize,
    options: DecodingOptions,
}

impl<'a> ReadCursor<'a> {
    /// Create a cursor at the start of `data` with default decoding limits.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_options(data, DecodingOptions::default())
    }

    /// Create a cursor at the start of `data` with explicit decoding limits.
    pub fn with_options(data: &'a [u8], options: DecodingOptions) -> Self {
        Self {
            data,
            offset: 0,
            options,
        }
    }

    /// Decoding limits in effect for this cursor.
    #[inline]
    pub fn options(&self) -> &DecodingOptions {
        &self.options
    }

    /// Current read position.
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bytes left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Check if at end of buffer.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Read `count` bytes as a slice of the underlying buffer.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        if count > self.remaining() {
            return Err(CodecError::truncated(count, self.remaining(), self.offset));
        }
        let start = self.offset;
        self.offset += count;
        Ok(&self.data[start..self.offset])
    }

    /// Skip bytes.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.read_bytes(count).map(|_| ())
    }

    /// Peek at the next byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.offset).copied()
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Read a signed byte.
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Read a u16 value.
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.read_bytes(2)?))
    }

    /// Read an i16 value.
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(LittleEndian::read_i16(self.read_bytes(2)?))
    }

    /// Read a u32 value.
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    /// Read an i32 value.
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.read_bytes(4)?))
    }

    /// Read a u64 value.
    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(self.read_bytes(8)?))
    }

    /// Read an i64 value.
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(LittleEndian::read_i64(self.read_bytes(8)?))
    }

    /// Read an f32 value.
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(LittleEndian::read_f32(self.read_bytes(4)?))
    }

    /// Read an f64 value.
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(LittleEndian::read_f64(self.read_bytes(8)?))
    }

    /// Read an i32 array length prefix.
    ///
    /// Negative prefixes are returned as-is so callers can tell null from
    /// empty. Positive prefixes above `max_array_length` fail before any
    /// element is read.
    pub fn read_array_length(&mut self, what: &str) -> Result<i32> {
        let length = self.read_i32()?;
        if length > 0 && length as usize > self.options.max_array_length {
            return Err(CodecError::length_exceeded(
                what,
                length as usize,
                self.options.max_array_length,
            ));
        }
        Ok(length)
    }
}
