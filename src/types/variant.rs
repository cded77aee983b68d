// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Variant codec.
//!
//! A Variant is a one-byte encoding mask followed by its payload. The low six
//! bits of the mask carry the built-in type id; bit 7 marks a one-dimensional
//! array (i32 count, then the element payloads with no per-element mask).
//! Bit 6 announces an array-dimensions trailer, which is not supported.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::date_time::{self, DATE_TIME_LEN};
use crate::core::{CodecError, Result};
use crate::encoding::primitives::{
    byte_string_len, read_byte_string, read_string, string_len, write_byte_string, write_string,
};
use crate::encoding::{BinaryEncodable, ReadCursor, WriteCursor};

/// Mask bits holding the built-in type id.
pub const TYPE_ID_MASK: u8 = 0x3f;

/// Mask bit announcing an array-dimensions trailer.
pub const ARRAY_DIMENSIONS_BIT: u8 = 0x40;

/// Mask bit marking an array payload.
pub const ARRAY_VALUES_BIT: u8 = 0x80;

/// Built-in types a Variant can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum VariantType {
    Null = 0,
    Boolean = 1,
    SByte = 2,
    Byte = 3,
    Int16 = 4,
    UInt16 = 5,
    Int32 = 6,
    UInt32 = 7,
    Int64 = 8,
    UInt64 = 9,
    Float = 10,
    Double = 11,
    String = 12,
    DateTime = 13,
    ByteString = 15,
    StatusCode = 19,
}

impl VariantType {
    /// Look up a built-in type by its wire id.
    pub fn from_id(id: u8) -> Option<Self> {
        Some(match id {
            0 => Self::Null,
            1 => Self::Boolean,
            2 => Self::SByte,
            3 => Self::Byte,
            4 => Self::Int16,
            5 => Self::UInt16,
            6 => Self::Int32,
            7 => Self::UInt32,
            8 => Self::Int64,
            9 => Self::UInt64,
            10 => Self::Float,
            11 => Self::Double,
            12 => Self::String,
            13 => Self::DateTime,
            15 => Self::ByteString,
            19 => Self::StatusCode,
            _ => return None,
        })
    }

    /// Wire id.
    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Payload size for fixed-width types.
    pub fn fixed_len(self) -> Option<usize> {
        match self {
            Self::Null => Some(0),
            Self::Boolean | Self::SByte | Self::Byte => Some(1),
            Self::Int16 | Self::UInt16 => Some(2),
            Self::Int32 | Self::UInt32 | Self::Float | Self::StatusCode => Some(4),
            Self::Int64 | Self::UInt64 | Self::Double => Some(8),
            Self::DateTime => Some(DATE_TIME_LEN),
            Self::String | Self::ByteString => None,
        }
    }

    /// Type name as used in the OPC UA information model.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::SByte => "SByte",
            Self::Byte => "Byte",
            Self::Int16 => "Int16",
            Self::UInt16 => "UInt16",
            Self::Int32 => "Int32",
            Self::UInt32 => "UInt32",
            Self::Int64 => "Int64",
            Self::UInt64 => "UInt64",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::String => "String",
            Self::DateTime => "DateTime",
            Self::ByteString => "ByteString",
            Self::StatusCode => "StatusCode",
        }
    }
}

/// One-dimensional array of scalars sharing one element type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantArray {
    pub element_type: VariantType,
    pub values: Vec<Variant>,
}

/// Tagged value embedded in a DataValue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Variant {
    Empty,
    Boolean(bool),
    SByte(i8),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Double(f64),
    /// `None` is the null string
    String(Option<String>),
    DateTime(DateTime<Utc>),
    /// `None` is the null byte string
    ByteString(Option<Vec<u8>>),
    StatusCode(u32),
    Array(VariantArray),
}

impl Variant {
    /// Build an array variant.
    pub fn array(element_type: VariantType, values: Vec<Variant>) -> Self {
        Variant::Array(VariantArray {
            element_type,
            values,
        })
    }

    /// Built-in type of the value; for arrays, the element type.
    pub fn variant_type(&self) -> VariantType {
        match self {
            Variant::Empty => VariantType::Null,
            Variant::Boolean(_) => VariantType::Boolean,
            Variant::SByte(_) => VariantType::SByte,
            Variant::Byte(_) => VariantType::Byte,
            Variant::Int16(_) => VariantType::Int16,
            Variant::UInt16(_) => VariantType::UInt16,
            Variant::Int32(_) => VariantType::Int32,
            Variant::UInt32(_) => VariantType::UInt32,
            Variant::Int64(_) => VariantType::Int64,
            Variant::UInt64(_) => VariantType::UInt64,
            Variant::Float(_) => VariantType::Float,
            Variant::Double(_) => VariantType::Double,
            Variant::String(_) => VariantType::String,
            Variant::DateTime(_) => VariantType::DateTime,
            Variant::ByteString(_) => VariantType::ByteString,
            Variant::StatusCode(_) => VariantType::StatusCode,
            Variant::Array(array) => array.element_type,
        }
    }

    /// Check if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, Variant::Array(_))
    }

    /// Encoding mask byte for this value.
    pub fn encoding_mask(&self) -> u8 {
        match self {
            Variant::Array(array) => array.element_type.id() | ARRAY_VALUES_BIT,
            other => other.variant_type().id(),
        }
    }

    fn scalar_len(&self) -> usize {
        match self {
            Variant::String(s) => string_len(s.as_deref()),
            Variant::ByteString(b) => byte_string_len(b.as_deref()),
            Variant::Array(array) => 4 + array.values.iter().map(Variant::scalar_len).sum::<usize>(),
            other => other.variant_type().fixed_len().unwrap_or(0),
        }
    }

    fn encode_scalar(&self, w: &mut WriteCursor<'_>) -> Result<()> {
        match self {
            Variant::Empty => Ok(()),
            Variant::Boolean(v) => w.write_u8(u8::from(*v)),
            Variant::SByte(v) => w.write_i8(*v),
            Variant::Byte(v) => w.write_u8(*v),
            Variant::Int16(v) => w.write_i16(*v),
            Variant::UInt16(v) => w.write_u16(*v),
            Variant::Int32(v) => w.write_i32(*v),
            Variant::UInt32(v) => w.write_u32(*v),
            Variant::Int64(v) => w.write_i64(*v),
            Variant::UInt64(v) => w.write_u64(*v),
            Variant::Float(v) => w.write_f32(*v),
            Variant::Double(v) => w.write_f64(*v),
            Variant::String(s) => write_string(w, s.as_deref()),
            Variant::DateTime(dt) => date_time::write(w, dt),
            Variant::ByteString(b) => write_byte_string(w, b.as_deref()),
            Variant::StatusCode(v) => w.write_u32(*v),
            Variant::Array(array) => {
                let mask = self.encoding_mask();
                if array.element_type == VariantType::Null {
                    return Err(CodecError::invalid_variant(mask, "array of Null"));
                }
                let count = i32::try_from(array.values.len()).map_err(|_| {
                    CodecError::invalid_variant(mask, "array has more than i32::MAX elements")
                })?;
                w.write_i32(count)?;
                for value in &array.values {
                    if value.is_array() || value.variant_type() != array.element_type {
                        return Err(CodecError::invalid_variant(
                            mask,
                            format!(
                                "array element of type {} in {} array",
                                value.variant_type().as_str(),
                                array.element_type.as_str()
                            ),
                        ));
                    }
                    value.encode_scalar(w)?;
                }
                Ok(())
            }
        }
    }

    fn decode_scalar(ty: VariantType, r: &mut ReadCursor<'_>) -> Result<Self> {
        Ok(match ty {
            VariantType::Null => Variant::Empty,
            VariantType::Boolean => Variant::Boolean(r.read_u8()? != 0),
            VariantType::SByte => Variant::SByte(r.read_i8()?),
            VariantType::Byte => Variant::Byte(r.read_u8()?),
            VariantType::Int16 => Variant::Int16(r.read_i16()?),
            VariantType::UInt16 => Variant::UInt16(r.read_u16()?),
            VariantType::Int32 => Variant::Int32(r.read_i32()?),
            VariantType::UInt32 => Variant::UInt32(r.read_u32()?),
            VariantType::Int64 => Variant::Int64(r.read_i64()?),
            VariantType::UInt64 => Variant::UInt64(r.read_u64()?),
            VariantType::Float => Variant::Float(r.read_f32()?),
            VariantType::Double => Variant::Double(r.read_f64()?),
            VariantType::String => Variant::String(read_string(r)?),
            VariantType::DateTime => Variant::DateTime(date_time::read(r)?),
            VariantType::ByteString => Variant::ByteString(read_byte_string(r)?),
            VariantType::StatusCode => Variant::StatusCode(r.read_u32()?),
        })
    }
}

impl BinaryEncodable for Variant {
    fn encoded_len(&self) -> usize {
        1 + self.scalar_len()
    }

    fn encode_into(&self, w: &mut WriteCursor<'_>) -> Result<()> {
        w.write_u8(self.encoding_mask())?;
        self.encode_scalar(w)
    }

    fn decode_from(r: &mut ReadCursor<'_>) -> Result<Self> {
        let mask = r.read_u8()?;
        if mask & ARRAY_DIMENSIONS_BIT != 0 {
            return Err(CodecError::invalid_variant(
                mask,
                "array dimensions are not supported",
            ));
        }
        let id = mask & TYPE_ID_MASK;
        let ty = VariantType::from_id(id)
            .ok_or_else(|| CodecError::invalid_variant(mask, format!("unsupported type id {id}")))?;

        if mask & ARRAY_VALUES_BIT == 0 {
            return Self::decode_scalar(ty, r);
        }
        if ty == VariantType::Null {
            return Err(CodecError::invalid_variant(mask, "array of Null"));
        }

        let count = r.read_array_length("Variant array")?;
        let count = count.max(0) as usize;
        let mut values = Vec::with_capacity(count.min(r.remaining()));
        for _ in 0..count {
            values.push(Self::decode_scalar(ty, r)?);
        }
        Ok(Variant::array(ty, values))
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Variant {
                fn from(value: $ty) -> Self {
                    Variant::$variant(value)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Boolean,
    i8 => SByte,
    u8 => Byte,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Float,
    f64 => Double,
    DateTime<Utc> => DateTime,
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::String(Some(value.to_owned()))
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::String(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_bytes() {
        let v = Variant::Float(2.50017);
        assert_eq!(v.to_bytes().unwrap(), vec![0x0a, 0xc9, 0x02, 0x20, 0x40]);
        assert_eq!(v.encoded_len(), 5);
    }

    #[test]
    fn test_empty_is_single_byte() {
        assert_eq!(Variant::Empty.to_bytes().unwrap(), vec![0x00]);
        assert_eq!(Variant::decode(&[0x00]).unwrap(), Variant::Empty);
    }

    #[test]
    fn test_string_round_trip() {
        let v = Variant::from("pump-7");
        let bytes = v.to_bytes().unwrap();
        assert_eq!(bytes[0], 12);
        assert_eq!(bytes.len(), 1 + 4 + 6);
        assert_eq!(Variant::decode(&bytes).unwrap(), v);
    }

    #[test]
    fn test_null_string() {
        let v = Variant::String(None);
        let bytes = v.to_bytes().unwrap();
        assert_eq!(bytes, vec![0x0c, 0xff, 0xff, 0xff, 0xff]);
        assert_eq!(Variant::decode(&bytes).unwrap(), v);
    }

    #[test]
    fn test_boolean_non_zero_is_true() {
        assert_eq!(Variant::decode(&[0x01, 0x02]).unwrap(), Variant::Boolean(true));
    }

    #[test]
    fn test_int32_array() {
        let v = Variant::array(
            VariantType::Int32,
            vec![Variant::Int32(1), Variant::Int32(-1)],
        );
        let bytes = v.to_bytes().unwrap();
        assert_eq!(
            bytes,
            vec![
                0x86, 0x02, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff
            ]
        );
        assert_eq!(Variant::decode(&bytes).unwrap(), v);
    }

    #[test]
    fn test_null_array_decodes_empty() {
        let bytes = [0x8b, 0xff, 0xff, 0xff, 0xff];
        assert_eq!(
            Variant::decode(&bytes).unwrap(),
            Variant::array(VariantType::Double, vec![])
        );
    }

    #[test]
    fn test_mixed_array_rejected() {
        let v = Variant::array(
            VariantType::Int32,
            vec![Variant::Int32(1), Variant::Double(2.0)],
        );
        let err = v.to_bytes().unwrap_err();
        assert!(matches!(err, CodecError::InvalidVariant { encoding_mask: 0x86, .. }));
    }

    #[test]
    fn test_unknown_type_id() {
        let err = Variant::decode(&[0x16, 0x00]).unwrap_err();
        assert_eq!(
            err,
            CodecError::invalid_variant(0x16, "unsupported type id 22")
        );
    }

    #[test]
    fn test_array_dimensions_rejected() {
        let err = Variant::decode(&[0xc6, 0x00, 0x00, 0x00, 0x00]).unwrap_err();
        assert!(matches!(err, CodecError::InvalidVariant { encoding_mask: 0xc6, .. }));
    }

    #[test]
    fn test_truncated_payload() {
        let err = Variant::decode(&[0x0b, 0x00, 0x00]).unwrap_err();
        assert_eq!(err, CodecError::truncated(8, 2, 1));
    }

    #[test]
    fn test_type_lookup() {
        assert_eq!(VariantType::from_id(15), Some(VariantType::ByteString));
        assert_eq!(VariantType::from_id(14), None);
        assert_eq!(VariantType::Float.fixed_len(), Some(4));
        assert_eq!(VariantType::String.fixed_len(), None);
    }
}
