// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! NodeId codec.
//!
//! The first byte selects the encoding form. The form is kept as decoded so
//! that re-encoding reproduces the original bytes.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{CodecError, Result};
use crate::encoding::primitives::{
    byte_string_len, read_byte_string, read_string, string_len, write_byte_string, write_string,
};
use crate::encoding::{BinaryEncodable, ReadCursor, WriteCursor};

const TWO_BYTE: u8 = 0x00;
const FOUR_BYTE: u8 = 0x01;
const NUMERIC: u8 = 0x02;
const STRING: u8 = 0x03;
const GUID: u8 = 0x04;
const BYTE_STRING: u8 = 0x05;

/// Identifier of a node in an OPC UA address space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeId {
    /// Namespace 0, id up to 255
    TwoByte { id: u8 },
    /// Namespace up to 255, id up to 65535
    FourByte { namespace: u8, id: u16 },
    Numeric { namespace: u16, id: u32 },
    String { namespace: u16, id: Option<String> },
    Guid { namespace: u16, id: Uuid },
    /// Opaque identifier carried as a ByteString
    ByteString { namespace: u16, id: Option<Vec<u8>> },
}

impl NodeId {
    /// Numeric NodeId in the most compact form that holds it.
    pub fn numeric(namespace: u16, id: u32) -> Self {
        match (u8::try_from(namespace), u16::try_from(id)) {
            (Ok(0), Ok(id)) if id <= u8::MAX as u16 => NodeId::TwoByte { id: id as u8 },
            (Ok(namespace), Ok(id)) => NodeId::FourByte { namespace, id },
            _ => NodeId::Numeric { namespace, id },
        }
    }

    /// String NodeId.
    pub fn string(namespace: u16, id: impl Into<String>) -> Self {
        NodeId::String {
            namespace,
            id: Some(id.into()),
        }
    }

    /// Opaque NodeId.
    pub fn opaque(namespace: u16, id: impl Into<Vec<u8>>) -> Self {
        NodeId::ByteString {
            namespace,
            id: Some(id.into()),
        }
    }

    /// The null NodeId (`ns=0;i=0`).
    pub fn null() -> Self {
        NodeId::TwoByte { id: 0 }
    }

    /// Namespace index.
    pub fn namespace(&self) -> u16 {
        match self {
            NodeId::TwoByte { .. } => 0,
            NodeId::FourByte { namespace, .. } => u16::from(*namespace),
            NodeId::Numeric { namespace, .. }
            | NodeId::String { namespace, .. }
            | NodeId::Guid { namespace, .. }
            | NodeId::ByteString { namespace, .. } => *namespace,
        }
    }

    /// Numeric identifier, whichever numeric form carries it.
    pub fn as_numeric(&self) -> Option<u32> {
        match self {
            NodeId::TwoByte { id } => Some(u32::from(*id)),
            NodeId::FourByte { id, .. } => Some(u32::from(*id)),
            NodeId::Numeric { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Check if this is the null NodeId in any numeric form.
    pub fn is_null(&self) -> bool {
        self.namespace() == 0 && self.as_numeric() == Some(0)
    }

    fn encoding_byte(&self) -> u8 {
        match self {
            NodeId::TwoByte { .. } => TWO_BYTE,
            NodeId::FourByte { .. } => FOUR_BYTE,
            NodeId::Numeric { .. } => NUMERIC,
            NodeId::String { .. } => STRING,
            NodeId::Guid { .. } => GUID,
            NodeId::ByteString { .. } => BYTE_STRING,
        }
    }
}

impl BinaryEncodable for NodeId {
    fn encoded_len(&self) -> usize {
        match self {
            NodeId::TwoByte { .. } => 2,
            NodeId::FourByte { .. } => 4,
            NodeId::Numeric { .. } => 7,
            NodeId::String { id, .. } => 3 + string_len(id.as_deref()),
            NodeId::Guid { .. } => 3 + 16,
            NodeId::ByteString { id, .. } => 3 + byte_string_len(id.as_deref()),
        }
    }

    fn encode_into(&self, w: &mut WriteCursor<'_>) -> Result<()> {
        w.write_u8(self.encoding_byte())?;
        match self {
            NodeId::TwoByte { id } => w.write_u8(*id),
            NodeId::FourByte { namespace, id } => {
                w.write_u8(*namespace)?;
                w.write_u16(*id)
            }
            NodeId::Numeric { namespace, id } => {
                w.write_u16(*namespace)?;
                w.write_u32(*id)
            }
            NodeId::String { namespace, id } => {
                w.write_u16(*namespace)?;
                write_string(w, id.as_deref())
            }
            NodeId::Guid { namespace, id } => {
                w.write_u16(*namespace)?;
                let (d1, d2, d3, d4) = id.as_fields();
                w.write_u32(d1)?;
                w.write_u16(d2)?;
                w.write_u16(d3)?;
                w.write_bytes(d4)
            }
            NodeId::ByteString { namespace, id } => {
                w.write_u16(*namespace)?;
                write_byte_string(w, id.as_deref())
            }
        }
    }

    fn decode_from(r: &mut ReadCursor<'_>) -> Result<Self> {
        let encoding = r.read_u8()?;
        Ok(match encoding {
            TWO_BYTE => NodeId::TwoByte { id: r.read_u8()? },
            FOUR_BYTE => NodeId::FourByte {
                namespace: r.read_u8()?,
                id: r.read_u16()?,
            },
            NUMERIC => NodeId::Numeric {
                namespace: r.read_u16()?,
                id: r.read_u32()?,
            },
            STRING => NodeId::String {
                namespace: r.read_u16()?,
                id: read_string(r)?,
            },
            GUID => {
                let namespace = r.read_u16()?;
                let d1 = r.read_u32()?;
                let d2 = r.read_u16()?;
                let d3 = r.read_u16()?;
                let mut d4 = [0u8; 8];
                d4.copy_from_slice(r.read_bytes(8)?);
                NodeId::Guid {
                    namespace,
                    id: Uuid::from_fields(d1, d2, d3, &d4),
                }
            }
            BYTE_STRING => NodeId::ByteString {
                namespace: r.read_u16()?,
                id: read_byte_string(r)?,
            },
            other => return Err(CodecError::invalid_node_id(other)),
        })
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = self.namespace();
        if ns != 0 {
            write!(f, "ns={ns};")?;
        }
        match self {
            NodeId::TwoByte { id } => write!(f, "i={id}"),
            NodeId::FourByte { id, .. } => write!(f, "i={id}"),
            NodeId::Numeric { id, .. } => write!(f, "i={id}"),
            NodeId::String { id, .. } => write!(f, "s={}", id.as_deref().unwrap_or("")),
            NodeId::Guid { id, .. } => write!(f, "g={id}"),
            NodeId::ByteString { id, .. } => {
                write!(f, "b={}", hex::encode(id.as_deref().unwrap_or_default()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_byte() {
        let id = NodeId::FourByte {
            namespace: 0,
            id: 2256,
        };
        assert_eq!(id.to_bytes().unwrap(), vec![0x01, 0x00, 0xd0, 0x08]);
        assert_eq!(id.to_string(), "i=2256");
    }

    #[test]
    fn test_numeric_picks_compact_form() {
        assert_eq!(NodeId::numeric(0, 85), NodeId::TwoByte { id: 85 });
        assert_eq!(
            NodeId::numeric(2, 2256),
            NodeId::FourByte {
                namespace: 2,
                id: 2256
            }
        );
        assert_eq!(
            NodeId::numeric(300, 1),
            NodeId::Numeric {
                namespace: 300,
                id: 1
            }
        );
        assert_eq!(NodeId::numeric(0, 70_000).encoded_len(), 7);
    }

    #[test]
    fn test_opaque() {
        let id = NodeId::opaque(0, vec![0xde, 0xad]);
        let bytes = id.to_bytes().unwrap();
        assert_eq!(
            bytes,
            vec![0x05, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0xde, 0xad]
        );
        assert_eq!(NodeId::decode(&bytes).unwrap(), id);
        assert_eq!(id.to_string(), "b=dead");
    }

    #[test]
    fn test_string_round_trip() {
        let id = NodeId::string(2, "Boiler/Temperature");
        let bytes = id.to_bytes().unwrap();
        assert_eq!(bytes.len(), id.encoded_len());
        assert_eq!(NodeId::decode(&bytes).unwrap(), id);
        assert_eq!(id.to_string(), "ns=2;s=Boiler/Temperature");
    }

    #[test]
    fn test_guid_layout() {
        let uuid = Uuid::parse_str("72962b91-fa75-4ae6-8d28-b404dc7daf63").unwrap();
        let id = NodeId::Guid {
            namespace: 1,
            id: uuid,
        };
        let bytes = id.to_bytes().unwrap();
        assert_eq!(bytes.len(), 19);
        assert_eq!(&bytes[3..7], &[0x91, 0x2b, 0x96, 0x72]);
        assert_eq!(&bytes[7..9], &[0x75, 0xfa]);
        assert_eq!(&bytes[9..11], &[0xe6, 0x4a]);
        assert_eq!(&bytes[11..], &[0x8d, 0x28, 0xb4, 0x04, 0xdc, 0x7d, 0xaf, 0x63]);
        assert_eq!(NodeId::decode(&bytes).unwrap(), id);
    }

    #[test]
    fn test_unknown_encoding() {
        assert_eq!(
            NodeId::decode(&[0x07, 0x00]).unwrap_err(),
            CodecError::invalid_node_id(0x07)
        );
    }

    #[test]
    fn test_null() {
        assert!(NodeId::null().is_null());
        assert!(NodeId::Numeric {
            namespace: 0,
            id: 0
        }
        .is_null());
        assert!(!NodeId::string(0, "").is_null());
    }
}
