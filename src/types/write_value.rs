// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! WriteValue: one node attribute to write, carrying a DataValue.

use serde::{Deserialize, Serialize};

use super::data_value::DataValue;
use super::node_id::NodeId;
use crate::core::Result;
use crate::encoding::primitives::{read_string, string_len, write_string};
use crate::encoding::{BinaryEncodable, ReadCursor, WriteCursor};

/// Node attributes addressable by a WriteValue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum AttributeId {
    NodeId = 1,
    NodeClass = 2,
    BrowseName = 3,
    DisplayName = 4,
    Description = 5,
    Value = 13,
    DataType = 14,
    AccessLevel = 17,
}

impl From<AttributeId> for u32 {
    fn from(id: AttributeId) -> Self {
        id as u32
    }
}

/// Target node, attribute and new value for a write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteValue {
    pub node_id: NodeId,
    pub attribute_id: u32,
    /// `None` writes the whole value
    pub index_range: Option<String>,
    pub value: DataValue,
}

impl WriteValue {
    pub fn new(
        node_id: NodeId,
        attribute_id: impl Into<u32>,
        index_range: Option<String>,
        value: DataValue,
    ) -> Self {
        Self {
            node_id,
            attribute_id: attribute_id.into(),
            index_range,
            value,
        }
    }
}

impl BinaryEncodable for WriteValue {
    fn encoded_len(&self) -> usize {
        self.node_id.encoded_len()
            + 4
            + string_len(self.index_range.as_deref())
            + self.value.encoded_len()
    }

    fn encode_into(&self, w: &mut WriteCursor<'_>) -> Result<()> {
        self.node_id.encode_into(w)?;
        w.write_u32(self.attribute_id)?;
        write_string(w, self.index_range.as_deref())?;
        self.value.encode_into(w)
    }

    fn decode_from(r: &mut ReadCursor<'_>) -> Result<Self> {
        Ok(Self {
            node_id: NodeId::decode_from(r)?,
            attribute_id: r.read_u32()?,
            index_range: read_string(r)?,
            value: DataValue::decode_from(r)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Variant;

    #[test]
    fn test_layout() {
        let wv = WriteValue::new(
            NodeId::numeric(0, 2256),
            AttributeId::Value,
            None,
            DataValue::builder().value(Variant::Boolean(true)).build(),
        );
        let bytes = wv.to_bytes().unwrap();
        assert_eq!(
            bytes,
            vec![
                0x01, 0x00, 0xd0, 0x08, // node id
                0x0d, 0x00, 0x00, 0x00, // attribute id
                0xff, 0xff, 0xff, 0xff, // index range
                0x01, 0x01, 0x01, // value
            ]
        );
        assert_eq!(WriteValue::decode(&bytes).unwrap(), wv);
    }

    #[test]
    fn test_index_range() {
        let wv = WriteValue::new(
            NodeId::string(3, "Array"),
            13u32,
            Some("1:2".to_string()),
            DataValue::default(),
        );
        let bytes = wv.to_bytes().unwrap();
        assert_eq!(bytes.len(), wv.encoded_len());
        assert_eq!(WriteValue::decode(&bytes).unwrap(), wv);
    }
}
