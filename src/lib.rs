// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # uacodec
//!
//! OPC UA binary codec for DataValue records and DataValue arrays.
//!
//! A DataValue is a presence mask followed by up to six optional fields; the
//! byte offset of every field depends on which fields precede it. This crate
//! decodes and encodes that layout, computes the exact encoded length without
//! encoding, and supplies the pieces a DataValue is embedded in:
//! - [`types`] - DataValue, DataValueArray, Variant, DateTime, NodeId, WriteValue
//! - [`services`] - RequestHeader and WriteRequest
//! - [`encoding`] - bounded cursors and the [`BinaryEncodable`] contract
//! - [`config`] - decoding limits
//!
//! ## Example: Encoding a DataValue
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use uacodec::{BinaryEncodable, DataValue, Variant};
//!
//! let dv = DataValue::builder()
//!     .value(Variant::Float(2.5))
//!     .status(0)
//!     .build();
//!
//! let mut buf = vec![0u8; dv.encoded_len()];
//! let written = dv.serialize_to(&mut buf)?;
//! assert_eq!(written, buf.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: Decoding a DataValueArray
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use uacodec::{BinaryEncodable, DataValueArray};
//!
//! let bytes = [0x02, 0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00];
//! let array = DataValueArray::decode(&bytes)?;
//! assert_eq!(array.len(), 2);
//! assert!(array.values[1].has_status());
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use crate::core::{CodecError, Result};

// Decoding limits
pub mod config;

pub use config::{ConfigError, DecodingOptions};

// Cursors and the codec contract
pub mod encoding;

pub use encoding::{BinaryEncodable, ReadCursor, WriteCursor};

// Wire types
pub mod types;

pub use types::{
    DataValue, DataValueArray, DataValueField, DataValueMask, NodeId, Variant, VariantType,
    WriteValue,
};

// Service messages
pub mod services;

pub use services::{RequestHeader, ServiceType, WriteRequest};
