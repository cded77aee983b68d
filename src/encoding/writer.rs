// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Write cursor over a caller-owned output buffer.
//!
//! The cursor never allocates. Callers size the destination with
//! [`BinaryEncodable::encoded_len`](super::BinaryEncodable::encoded_len);
//! a write that does not fit fails with [`CodecError::OutputTooSmall`]
//! and leaves the bytes after the cursor untouched.

use byteorder::{ByteOrder, LittleEndian};

use crate::core::{CodecError, Result};

/// Little-endian writer over a mutable byte slice.
///
/// # Example
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use uacodec::encoding::WriteCursor;
///
/// let mut buf = [0u8; 6];
/// let mut writer = WriteCursor::new(&mut buf);
/// writer.write_u32(42)?;
/// writer.write_u16(7)?;
/// assert_eq!(writer.position(), 6);
/// assert!(writer.write_u8(1).is_err());
/// assert_eq!(buf, [0x2a, 0, 0, 0, 0x07, 0]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WriteCursor<'a> {
    buffer: &'a mut [u8],
    offset: usize,
}

impl<'a> WriteCursor<'a> {
    /// Create a writer at the start of `buffer`.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    /// Current write position (bytes written so far).
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bytes left in the destination.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    /// Reserve `count` bytes at the cursor and advance past them.
    fn claim(&mut self, count: usize) -> Result<&mut [u8]> {
        if count > self.remaining() {
            return Err(CodecError::output_too_small(
                count,
                self.remaining(),
                self.offset,
            ));
        }
        let start = self.offset;
        self.offset += count;
        Ok(&mut self.buffer[start..start + count])
    }

    /// Write raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.claim(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.claim(1)?[0] = value;
        Ok(())
    }

    /// Write a signed byte.
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write_u8(value as u8)
    }

    /// Write a u16 value.
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        LittleEndian::write_u16(self.claim(2)?, value);
        Ok(())
    }

    /// Write an i16 value.
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        LittleEndian::write_i16(self.claim(2)?, value);
        Ok(())
    }

    /// Write a u32 value.
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        LittleEndian::write_u32(self.claim(4)?, value);
        Ok(())
    }

    /// Write an i32 value.
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        LittleEndian::write_i32(self.claim(4)?, value);
        Ok(())
    }

    /// Write a u64 value.
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        LittleEndian::write_u64(self.claim(8)?, value);
        Ok(())
    }

    /// Write an i64 value.
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        LittleEndian::write_i64(self.claim(8)?, value);
        Ok(())
    }

    /// Write an f32 value.
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        LittleEndian::write_f32(self.claim(4)?, value);
        Ok(())
    }

    /// Write an f64 value.
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        LittleEndian::write_f64(self.claim(8)?, value);
        Ok(())
    }
}
