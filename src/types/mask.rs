// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! DataValue presence mask.
//!
//! The mask byte precedes every DataValue and declares which optional
//! fields follow. Bit positions are fixed by the protocol:
//!
//! | bit | field              |
//! |-----|--------------------|
//! | 0   | Value              |
//! | 1   | Status             |
//! | 2   | SourceTimestamp    |
//! | 3   | ServerTimestamp    |
//! | 4   | SourcePicoseconds  |
//! | 5   | ServerPicoseconds  |
//!
//! Bits 6 and 7 are reserved and carried through unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Optional DataValue field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataValueField {
    Value,
    Status,
    SourceTimestamp,
    ServerTimestamp,
    SourcePicoseconds,
    ServerPicoseconds,
}

impl DataValueField {
    /// Order in which present fields appear on the wire. This is not the
    /// bit order: each picoseconds field follows its own timestamp.
    pub const WIRE_ORDER: [DataValueField; 6] = [
        DataValueField::Value,
        DataValueField::Status,
        DataValueField::SourceTimestamp,
        DataValueField::SourcePicoseconds,
        DataValueField::ServerTimestamp,
        DataValueField::ServerPicoseconds,
    ];

    /// Mask bit for this field.
    #[inline]
    pub const fn bit(self) -> u8 {
        match self {
            DataValueField::Value => 0x01,
            DataValueField::Status => 0x02,
            DataValueField::SourceTimestamp => 0x04,
            DataValueField::ServerTimestamp => 0x08,
            DataValueField::SourcePicoseconds => 0x10,
            DataValueField::ServerPicoseconds => 0x20,
        }
    }

    /// Field name.
    pub fn as_str(self) -> &'static str {
        match self {
            DataValueField::Value => "Value",
            DataValueField::Status => "Status",
            DataValueField::SourceTimestamp => "SourceTimestamp",
            DataValueField::ServerTimestamp => "ServerTimestamp",
            DataValueField::SourcePicoseconds => "SourcePicoseconds",
            DataValueField::ServerPicoseconds => "ServerPicoseconds",
        }
    }

    /// Encoded width for fixed-width fields. `Value` is variable.
    pub const fn fixed_len(self) -> Option<usize> {
        match self {
            DataValueField::Value => None,
            DataValueField::Status => Some(4),
            DataValueField::SourceTimestamp | DataValueField::ServerTimestamp => Some(8),
            DataValueField::SourcePicoseconds | DataValueField::ServerPicoseconds => Some(2),
        }
    }
}

/// Presence mask byte of a DataValue.
///
/// Setting a field is additive; nothing clears a single bit. To drop flags,
/// replace the whole mask with [`DataValueMask::from_bits`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataValueMask(u8);

impl DataValueMask {
    /// Mask with no field present.
    pub const EMPTY: DataValueMask = DataValueMask(0);

    /// Wrap a raw mask byte, reserved bits included.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        DataValueMask(bits)
    }

    /// Raw mask byte.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Test one field's bit.
    #[inline]
    pub const fn contains(self, field: DataValueField) -> bool {
        self.0 & field.bit() != 0
    }

    /// Set one field's bit in place.
    #[inline]
    pub fn insert(&mut self, field: DataValueField) {
        self.0 |= field.bit();
    }

    /// Return a copy with one field's bit set.
    #[inline]
    #[must_use]
    pub const fn with(self, field: DataValueField) -> Self {
        DataValueMask(self.0 | field.bit())
    }

    /// Present fields in wire order.
    pub fn present_fields(self) -> impl Iterator<Item = DataValueField> {
        DataValueField::WIRE_ORDER
            .into_iter()
            .filter(move |field| self.contains(*field))
    }

    pub const fn has_value(self) -> bool {
        self.contains(DataValueField::Value)
    }

    pub const fn has_status(self) -> bool {
        self.contains(DataValueField::Status)
    }

    pub const fn has_source_timestamp(self) -> bool {
        self.contains(DataValueField::SourceTimestamp)
    }

    pub const fn has_server_timestamp(self) -> bool {
        self.contains(DataValueField::ServerTimestamp)
    }

    pub const fn has_source_picoseconds(self) -> bool {
        self.contains(DataValueField::SourcePicoseconds)
    }

    pub const fn has_server_picoseconds(self) -> bool {
        self.contains(DataValueField::ServerPicoseconds)
    }
}

impl From<u8> for DataValueMask {
    fn from(bits: u8) -> Self {
        DataValueMask(bits)
    }
}

impl fmt::Display for DataValueMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)?;
        let mut sep = " [";
        for field in self.present_fields() {
            write!(f, "{sep}{}", field.as_str())?;
            sep = ", ";
        }
        if sep == ", " {
            write!(f, "]")?;
        }
        Ok(())
    }
}
