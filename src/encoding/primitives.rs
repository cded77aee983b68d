// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! UA String and ByteString helpers.
//!
//! Both carry an i32 length prefix. `-1` is the null value; any other
//! negative prefix is treated as null as well. The payload follows the
//! prefix with no terminator.

use super::{ReadCursor, WriteCursor};
use crate::core::{CodecError, Result};

/// Length prefix written for a null String or ByteString.
pub const NULL_LENGTH: i32 = -1;

fn read_prefixed<'a>(
    r: &mut ReadCursor<'a>,
    what: &str,
    limit: usize,
) -> Result<Option<&'a [u8]>> {
    let length = r.read_i32()?;
    if length < 0 {
        return Ok(None);
    }
    let length = length as usize;
    if length > limit {
        return Err(CodecError::length_exceeded(what, length, limit));
    }
    r.read_bytes(length).map(Some)
}

fn write_prefixed(w: &mut WriteCursor<'_>, bytes: Option<&[u8]>) -> Result<()> {
    match bytes {
        None => w.write_i32(NULL_LENGTH),
        Some(bytes) => {
            let length = i32::try_from(bytes.len()).map_err(|_| {
                CodecError::length_exceeded("encoded string", bytes.len(), i32::MAX as usize)
            })?;
            w.write_i32(length)?;
            w.write_bytes(bytes)
        }
    }
}

/// Decode a UA String.
pub fn read_string(r: &mut ReadCursor<'_>) -> Result<Option<String>> {
    let limit = r.options().max_string_length;
    let position = r.position() + 4;
    match read_prefixed(r, "String", limit)? {
        None => Ok(None),
        Some(bytes) => std::str::from_utf8(bytes)
            .map(|s| Some(s.to_owned()))
            .map_err(|e| CodecError::invalid_string(position, e.to_string())),
    }
}

/// Encode a UA String.
pub fn write_string(w: &mut WriteCursor<'_>, value: Option<&str>) -> Result<()> {
    write_prefixed(w, value.map(str::as_bytes))
}

/// Encoded size of a UA String.
pub fn string_len(value: Option<&str>) -> usize {
    4 + value.map_or(0, str::len)
}

/// Decode a UA ByteString.
pub fn read_byte_string(r: &mut ReadCursor<'_>) -> Result<Option<Vec<u8>>> {
    let limit = r.options().max_byte_string_length;
    Ok(read_prefixed(r, "ByteString", limit)?.map(<[u8]>::to_vec))
}

/// Encode a UA ByteString.
pub fn write_byte_string(w: &mut WriteCursor<'_>, value: Option<&[u8]>) -> Result<()> {
    write_prefixed(w, value)
}

/// Encoded size of a UA ByteString.
pub fn byte_string_len(value: Option<&[u8]>) -> usize {
    4 + value.map_or(0, <[u8]>::len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecodingOptions;

    #[test]
    fn test_null_string() {
        let data = [0xff, 0xff, 0xff, 0xff];
        let mut r = ReadCursor::new(&data);
        assert_eq!(read_string(&mut r).unwrap(), None);

        let mut buf = [0u8; 4];
        write_string(&mut WriteCursor::new(&mut buf), None).unwrap();
        assert_eq!(buf, data);
        assert_eq!(string_len(None), 4);
    }

    #[test]
    fn test_string_payload() {
        let data = [0x03, 0x00, 0x00, 0x00, b'a', b'b', b'c'];
        let mut r = ReadCursor::new(&data);
        assert_eq!(read_string(&mut r).unwrap().as_deref(), Some("abc"));
        assert_eq!(string_len(Some("abc")), data.len());
    }

    #[test]
    fn test_empty_string_is_not_null() {
        let data = [0x00, 0x00, 0x00, 0x00];
        let mut r = ReadCursor::new(&data);
        assert_eq!(read_string(&mut r).unwrap(), Some(String::new()));
    }

    #[test]
    fn test_invalid_utf8() {
        let data = [0x02, 0x00, 0x00, 0x00, 0xc3, 0x28];
        let mut r = ReadCursor::new(&data);
        let err = read_string(&mut r).unwrap_err();
        assert!(matches!(err, CodecError::InvalidString { position: 4, .. }));
    }

    #[test]
    fn test_truncated_payload() {
        let data = [0x05, 0x00, 0x00, 0x00, 0x01, 0x02];
        let mut r = ReadCursor::new(&data);
        assert_eq!(
            read_byte_string(&mut r).unwrap_err(),
            CodecError::truncated(5, 2, 4)
        );
    }

    #[test]
    fn test_byte_string_limit() {
        let data = [0x05, 0x00, 0x00, 0x00, 1, 2, 3, 4, 5];
        let opts = DecodingOptions::default().with_max_byte_string_length(4);
        let mut r = ReadCursor::with_options(&data, opts);
        assert_eq!(
            read_byte_string(&mut r).unwrap_err(),
            CodecError::length_exceeded("ByteString", 5, 4)
        );
    }
}
