// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! WriteRequest message.
//!
//! ```text
//! type_id:NodeId (ns=0;i=673)
//! header:RequestHeader
//! nodes_to_write:i32 count, WriteValue*
//! ```
//!
//! A null NodesToWrite array (negative count) decodes as an empty list and
//! re-encodes with a count of `0`. Unlike [`DataValueArray`](crate::DataValueArray),
//! the request does not keep the raw count.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::request_header::RequestHeader;
use super::service_type::ServiceType;
use crate::core::{CodecError, Result};
use crate::encoding::{BinaryEncodable, ReadCursor, WriteCursor};
use crate::types::{NodeId, WriteValue};

/// Request to write one or more node attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteRequest {
    pub header: RequestHeader,
    pub nodes_to_write: Vec<WriteValue>,
}

impl WriteRequest {
    pub const SERVICE_TYPE: ServiceType = ServiceType::WriteRequest;

    pub fn new(header: RequestHeader, nodes_to_write: Vec<WriteValue>) -> Self {
        Self {
            header,
            nodes_to_write,
        }
    }

    pub fn service_type(&self) -> ServiceType {
        Self::SERVICE_TYPE
    }
}

impl BinaryEncodable for WriteRequest {
    fn encoded_len(&self) -> usize {
        Self::SERVICE_TYPE.type_id().encoded_len()
            + self.header.encoded_len()
            + 4
            + self
                .nodes_to_write
                .iter()
                .map(WriteValue::encoded_len)
                .sum::<usize>()
    }

    fn encode_into(&self, w: &mut WriteCursor<'_>) -> Result<()> {
        Self::SERVICE_TYPE.type_id().encode_into(w)?;
        self.header.encode_into(w)?;
        let count = i32::try_from(self.nodes_to_write.len()).map_err(|_| {
            CodecError::length_exceeded(
                "NodesToWrite",
                self.nodes_to_write.len(),
                i32::MAX as usize,
            )
        })?;
        w.write_i32(count)?;
        for node in &self.nodes_to_write {
            node.encode_into(w)?;
        }
        Ok(())
    }

    fn decode_from(r: &mut ReadCursor<'_>) -> Result<Self> {
        let type_id = NodeId::decode_from(r)?;
        if ServiceType::from_type_id(&type_id) != Some(Self::SERVICE_TYPE) {
            return Err(CodecError::unexpected_type(
                Self::SERVICE_TYPE.type_id().to_string(),
                type_id.to_string(),
            ));
        }

        let header = RequestHeader::decode_from(r)?;
        let count = r.read_array_length("NodesToWrite")?;
        if count < 0 {
            warn!(count, "null NodesToWrite decoded as empty");
        }
        let count = count.max(0) as usize;
        debug!(
            request_handle = header.request_handle,
            count, "decoding WriteRequest"
        );
        let mut nodes_to_write = Vec::with_capacity(count.min(r.remaining()));
        for _ in 0..count {
            nodes_to_write.push(WriteValue::decode_from(r)?);
        }
        Ok(Self {
            header,
            nodes_to_write,
        })
    }
}
