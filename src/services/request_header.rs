// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! RequestHeader shared by every service request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::encoding::primitives::{read_string, string_len, write_string};
use crate::encoding::{BinaryEncodable, ReadCursor, WriteCursor};
use crate::types::date_time::{self, DATE_TIME_LEN};
use crate::types::{ExtensionObject, NodeId};

/// Common request parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestHeader {
    pub authentication_token: NodeId,
    pub timestamp: DateTime<Utc>,
    pub request_handle: u32,
    pub return_diagnostics: u32,
    pub audit_entry_id: Option<String>,
    pub timeout_hint: u32,
    pub additional_header: ExtensionObject,
}

impl RequestHeader {
    /// Header with no diagnostics, audit id, timeout or additional header.
    pub fn new(authentication_token: NodeId, timestamp: DateTime<Utc>, request_handle: u32) -> Self {
        Self {
            authentication_token,
            timestamp,
            request_handle,
            return_diagnostics: 0,
            audit_entry_id: None,
            timeout_hint: 0,
            additional_header: ExtensionObject::null(),
        }
    }
}

impl BinaryEncodable for RequestHeader {
    fn encoded_len(&self) -> usize {
        self.authentication_token.encoded_len()
            + DATE_TIME_LEN
            + 4
            + 4
            + string_len(self.audit_entry_id.as_deref())
            + 4
            + self.additional_header.encoded_len()
    }

    fn encode_into(&self, w: &mut WriteCursor<'_>) -> Result<()> {
        self.authentication_token.encode_into(w)?;
        date_time::write(w, &self.timestamp)?;
        w.write_u32(self.request_handle)?;
        w.write_u32(self.return_diagnostics)?;
        write_string(w, self.audit_entry_id.as_deref())?;
        w.write_u32(self.timeout_hint)?;
        self.additional_header.encode_into(w)
    }

    fn decode_from(r: &mut ReadCursor<'_>) -> Result<Self> {
        Ok(Self {
            authentication_token: NodeId::decode_from(r)?,
            timestamp: date_time::read(r)?,
            request_handle: r.read_u32()?,
            return_diagnostics: r.read_u32()?,
            audit_entry_id: read_string(r)?,
            timeout_hint: r.read_u32()?,
            additional_header: ExtensionObject::decode_from(r)?,
        })
    }
}
