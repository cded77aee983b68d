// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! ExtensionObject codec.
//!
//! The body is carried opaquely; this crate never interprets it.

use serde::{Deserialize, Serialize};

use super::node_id::NodeId;
use crate::core::Result;
use crate::encoding::primitives::{byte_string_len, read_byte_string, write_byte_string};
use crate::encoding::{BinaryEncodable, ReadCursor, WriteCursor};

/// How the body of an ExtensionObject is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyEncoding {
    None,
    Binary,
    Xml,
    /// Any other encoding byte; no body follows.
    Unknown(u8),
}

impl BodyEncoding {
    fn from_byte(byte: u8) -> Self {
        match byte {
            0x00 => BodyEncoding::None,
            0x01 => BodyEncoding::Binary,
            0x02 => BodyEncoding::Xml,
            other => BodyEncoding::Unknown(other),
        }
    }

    fn to_byte(self) -> u8 {
        match self {
            BodyEncoding::None => 0x00,
            BodyEncoding::Binary => 0x01,
            BodyEncoding::Xml => 0x02,
            BodyEncoding::Unknown(other) => other,
        }
    }

    fn has_body(self) -> bool {
        matches!(self, BodyEncoding::Binary | BodyEncoding::Xml)
    }
}

/// Structure carried by type id with an opaque body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionObject {
    pub type_id: NodeId,
    pub encoding: BodyEncoding,
    pub body: Option<Vec<u8>>,
}

impl ExtensionObject {
    /// Null ExtensionObject, encoded as `00 00 00`.
    pub fn null() -> Self {
        Self {
            type_id: NodeId::null(),
            encoding: BodyEncoding::None,
            body: None,
        }
    }

    /// ExtensionObject with a binary body.
    pub fn binary(type_id: NodeId, body: Vec<u8>) -> Self {
        Self {
            type_id,
            encoding: BodyEncoding::Binary,
            body: Some(body),
        }
    }

    pub fn is_null(&self) -> bool {
        self.type_id.is_null() && !self.encoding.has_body()
    }
}

impl Default for ExtensionObject {
    fn default() -> Self {
        Self::null()
    }
}

impl BinaryEncodable for ExtensionObject {
    fn encoded_len(&self) -> usize {
        let body = if self.encoding.has_body() {
            byte_string_len(self.body.as_deref())
        } else {
            0
        };
        self.type_id.encoded_len() + 1 + body
    }

    fn encode_into(&self, w: &mut WriteCursor<'_>) -> Result<()> {
        self.type_id.encode_into(w)?;
        w.write_u8(self.encoding.to_byte())?;
        if self.encoding.has_body() {
            write_byte_string(w, self.body.as_deref())?;
        }
        Ok(())
    }

    fn decode_from(r: &mut ReadCursor<'_>) -> Result<Self> {
        let type_id = NodeId::decode_from(r)?;
        let encoding = BodyEncoding::from_byte(r.read_u8()?);
        let body = if encoding.has_body() {
            read_byte_string(r)?
        } else {
            None
        };
        Ok(Self {
            type_id,
            encoding,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_bytes() {
        let obj = ExtensionObject::null();
        assert_eq!(obj.to_bytes().unwrap(), vec![0x00, 0x00, 0x00]);
        assert!(ExtensionObject::decode(&[0x00, 0x00, 0x00]).unwrap().is_null());
    }

    #[test]
    fn test_binary_body() {
        let obj = ExtensionObject::binary(NodeId::numeric(0, 298), vec![1, 2, 3]);
        let bytes = obj.to_bytes().unwrap();
        assert_eq!(bytes, vec![0x01, 0x00, 0x2a, 0x01, 0x01, 0x03, 0x00, 0x00, 0x00, 1, 2, 3]);
        assert_eq!(ExtensionObject::decode(&bytes).unwrap(), obj);
        assert!(!obj.is_null());
    }
}
