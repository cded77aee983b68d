// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! DataValue codec.
//!
//! A DataValue is a presence mask followed by the present fields in wire
//! order (see [`DataValueField::WIRE_ORDER`]):
//!
//! ```text
//! mask:u8
//! [value:Variant          if Value]
//! [status:u32             if Status]
//! [source_timestamp:i64   if SourceTimestamp]
//! [source_picoseconds:u16 if SourcePicoseconds]
//! [server_timestamp:i64   if ServerTimestamp]
//! [server_picoseconds:u16 if ServerPicoseconds]
//! ```
//!
//! Decoding, encoding and [`encoded_len`](BinaryEncodable::encoded_len) all
//! walk the same field sequence, so the computed length always equals the
//! bytes written. A Value bit set without a Variant contributes zero bytes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::date_time;
use super::mask::{DataValueField, DataValueMask};
use super::variant::Variant;
use crate::core::Result;
use crate::encoding::{BinaryEncodable, ReadCursor, WriteCursor};

/// Value with quality and timestamp metadata.
///
/// Fields whose presence bit is clear hold their zero value: no Variant,
/// status `0`, timestamps at [`date_time::epoch`], picoseconds `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataValue {
    mask: DataValueMask,
    pub value: Option<Variant>,
    pub status: u32,
    pub source_timestamp: DateTime<Utc>,
    pub source_picoseconds: u16,
    pub server_timestamp: DateTime<Utc>,
    pub server_picoseconds: u16,
}

impl Default for DataValue {
    fn default() -> Self {
        Self {
            mask: DataValueMask::EMPTY,
            value: None,
            status: 0,
            source_timestamp: date_time::epoch(),
            source_picoseconds: 0,
            server_timestamp: date_time::epoch(),
            server_picoseconds: 0,
        }
    }
}

impl DataValue {
    /// Start building a DataValue.
    pub fn builder() -> DataValueBuilder {
        DataValueBuilder::default()
    }

    /// Presence mask.
    #[inline]
    pub fn mask(&self) -> DataValueMask {
        self.mask
    }

    /// Mark a field present. Additive; other bits are kept.
    pub fn set_flag(&mut self, field: DataValueField) {
        self.mask.insert(field);
    }

    /// Replace the whole presence mask.
    pub fn set_mask(&mut self, mask: DataValueMask) {
        self.mask = mask;
    }

    /// Check whether a field is marked present.
    #[inline]
    pub fn has(&self, field: DataValueField) -> bool {
        self.mask.contains(field)
    }

    pub fn has_value(&self) -> bool {
        self.mask.has_value()
    }

    pub fn has_status(&self) -> bool {
        self.mask.has_status()
    }

    pub fn has_source_timestamp(&self) -> bool {
        self.mask.has_source_timestamp()
    }

    pub fn has_server_timestamp(&self) -> bool {
        self.mask.has_server_timestamp()
    }

    pub fn has_source_picoseconds(&self) -> bool {
        self.mask.has_source_picoseconds()
    }

    pub fn has_server_picoseconds(&self) -> bool {
        self.mask.has_server_picoseconds()
    }

    /// Encoded width of one field if it is present.
    fn field_len(&self, field: DataValueField) -> usize {
        match field {
            DataValueField::Value => self.value.as_ref().map_or(0, Variant::encoded_len),
            fixed => fixed.fixed_len().unwrap_or(0),
        }
    }

    fn encode_field(&self, field: DataValueField, w: &mut WriteCursor<'_>) -> Result<()> {
        match field {
            DataValueField::Value => match &self.value {
                Some(value) => value.encode_into(w),
                None => Ok(()),
            },
            DataValueField::Status => w.write_u32(self.status),
            DataValueField::SourceTimestamp => date_time::write(w, &self.source_timestamp),
            DataValueField::SourcePicoseconds => w.write_u16(self.source_picoseconds),
            DataValueField::ServerTimestamp => date_time::write(w, &self.server_timestamp),
            DataValueField::ServerPicoseconds => w.write_u16(self.server_picoseconds),
        }
    }

    fn decode_field(&mut self, field: DataValueField, r: &mut ReadCursor<'_>) -> Result<()> {
        match field {
            DataValueField::Value => self.value = Some(Variant::decode_from(r)?),
            DataValueField::Status => self.status = r.read_u32()?,
            DataValueField::SourceTimestamp => self.source_timestamp = date_time::read(r)?,
            DataValueField::SourcePicoseconds => self.source_picoseconds = r.read_u16()?,
            DataValueField::ServerTimestamp => self.server_timestamp = date_time::read(r)?,
            DataValueField::ServerPicoseconds => self.server_picoseconds = r.read_u16()?,
        }
        Ok(())
    }
}

impl BinaryEncodable for DataValue {
    fn encoded_len(&self) -> usize {
        1 + self
            .mask
            .present_fields()
            .map(|field| self.field_len(field))
            .sum::<usize>()
    }

    fn encode_into(&self, w: &mut WriteCursor<'_>) -> Result<()> {
        w.write_u8(self.mask.bits())?;
        for field in self.mask.present_fields() {
            self.encode_field(field, w)?;
        }
        Ok(())
    }

    fn decode_from(r: &mut ReadCursor<'_>) -> Result<Self> {
        let mut dv = DataValue {
            mask: DataValueMask::from_bits(r.read_u8()?),
            ..DataValue::default()
        };
        for field in dv.mask.present_fields() {
            trace!(field = field.as_str(), position = r.position(), "decoding DataValue field");
            dv.decode_field(field, r)?;
        }
        Ok(dv)
    }
}

/// Builder for [`DataValue`].
///
/// Typed setters store the value and mark the field present. [`flag`]
/// marks a field present without touching its value, and [`mask`] replaces
/// the mask outright.
///
/// [`flag`]: DataValueBuilder::flag
/// [`mask`]: DataValueBuilder::mask
///
/// # Example
///
/// ```
/// use uacodec::types::{DataValue, Variant};
///
/// let dv = DataValue::builder()
///     .value(Variant::Double(21.5))
///     .status(0)
///     .build();
/// assert!(dv.has_value());
/// assert!(dv.has_status());
/// assert!(!dv.has_source_timestamp());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DataValueBuilder {
    inner: DataValue,
}

impl DataValueBuilder {
    pub fn value(mut self, value: impl Into<Variant>) -> Self {
        self.inner.value = Some(value.into());
        self.flag(DataValueField::Value)
    }

    pub fn status(mut self, status: u32) -> Self {
        self.inner.status = status;
        self.flag(DataValueField::Status)
    }

    pub fn source_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.inner.source_timestamp = ts;
        self.flag(DataValueField::SourceTimestamp)
    }

    pub fn source_picoseconds(mut self, ps: u16) -> Self {
        self.inner.source_picoseconds = ps;
        self.flag(DataValueField::SourcePicoseconds)
    }

    pub fn server_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.inner.server_timestamp = ts;
        self.flag(DataValueField::ServerTimestamp)
    }

    pub fn server_picoseconds(mut self, ps: u16) -> Self {
        self.inner.server_picoseconds = ps;
        self.flag(DataValueField::ServerPicoseconds)
    }

    /// Mark a field present without setting its value.
    pub fn flag(mut self, field: DataValueField) -> Self {
        self.inner.set_flag(field);
        self
    }

    /// Mark a field present when `present` is true.
    pub fn flag_if(self, field: DataValueField, present: bool) -> Self {
        if present {
            self.flag(field)
        } else {
            self
        }
    }

    /// Replace the mask, discarding any bits set so far.
    pub fn mask(mut self, mask: DataValueMask) -> Self {
        self.inner.set_mask(mask);
        self
    }

    pub fn build(self) -> DataValue {
        self.inner
    }
}
