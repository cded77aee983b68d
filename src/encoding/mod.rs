// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! OPC UA binary encoding primitives.
//!
//! ## Architecture
//!
//! - [`ReadCursor`] / [`WriteCursor`] - bounded little-endian I/O over slices
//! - [`BinaryEncodable`] - the contract every wire type implements
//! - [`primitives`] - String and ByteString helpers
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use uacodec::encoding::BinaryEncodable;
//! use uacodec::types::{DataValue, Variant};
//!
//! let value = DataValue::builder().value(Variant::Int32(7)).build();
//! let bytes = value.to_bytes()?;
//! assert_eq!(bytes.len(), value.encoded_len());
//! assert_eq!(DataValue::decode(&bytes)?, value);
//! # Ok(())
//! # }
//! ```

pub mod cursor;
pub mod primitives;
pub mod writer;

pub use cursor::ReadCursor;
pub use writer::WriteCursor;

use crate::config::DecodingOptions;
use crate::core::Result;

/// A type with an OPC UA binary wire form.
///
/// `encoded_len` must equal the number of bytes `encode_into` writes; callers
/// rely on it to pre-size output buffers and to step over self-delimiting
/// records.
pub trait BinaryEncodable: Sized {
    /// Exact encoded size in bytes, computed without encoding.
    fn encoded_len(&self) -> usize;

    /// Encode at the writer's position.
    fn encode_into(&self, w: &mut WriteCursor<'_>) -> Result<()>;

    /// Decode from the reader's position.
    fn decode_from(r: &mut ReadCursor<'_>) -> Result<Self>;

    /// Encode into the start of `buf`, returning the number of bytes written.
    ///
    /// Fails with [`CodecError::OutputTooSmall`](crate::CodecError::OutputTooSmall)
    /// if `buf` is shorter than [`encoded_len`](Self::encoded_len).
    fn serialize_to(&self, buf: &mut [u8]) -> Result<usize> {
        let mut w = WriteCursor::new(buf);
        self.encode_into(&mut w)?;
        Ok(w.position())
    }

    /// Encode into a freshly allocated buffer of exactly `encoded_len()` bytes.
    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; self.encoded_len()];
        let written = self.serialize_to(&mut buf)?;
        debug_assert_eq!(written, buf.len(), "encoded_len disagrees with encode_into");
        Ok(buf)
    }

    /// Decode from the start of `buf` with default limits. Trailing bytes are
    /// ignored.
    fn decode(buf: &[u8]) -> Result<Self> {
        Self::decode_with_options(buf, &DecodingOptions::default())
    }

    /// Decode from the start of `buf` with explicit limits.
    fn decode_with_options(buf: &[u8], options: &DecodingOptions) -> Result<Self> {
        let mut r = ReadCursor::with_options(buf, *options);
        Self::decode_from(&mut r)
    }
}
