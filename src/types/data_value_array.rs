// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! DataValueArray codec.
//!
//! An i32 element count followed by that many DataValues packed back to
//! back. Elements are self-delimiting only through their own mask, so the
//! decoder walks them one at a time; a uniform stride cannot be assumed.
//! A count of zero or below means no elements follow.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::data_value::DataValue;
use crate::core::Result;
use crate::encoding::{BinaryEncodable, ReadCursor, WriteCursor};

/// Ordered collection of DataValues with its wire count.
///
/// `count` is written as-is. It normally equals `values.len()`, but a decoded
/// null array keeps its negative count and a caller may store any count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataValueArray {
    pub count: i32,
    pub values: Vec<DataValue>,
}

impl DataValueArray {
    /// Build an array whose count matches `values`.
    ///
    /// Counts saturate at `i32::MAX`.
    pub fn new(values: Vec<DataValue>) -> Self {
        let count = i32::try_from(values.len()).unwrap_or(i32::MAX);
        Self { count, values }
    }

    /// Build an array with an explicit count. The count is not checked
    /// against `values`.
    pub fn with_count(count: i32, values: Vec<DataValue>) -> Self {
        Self { count, values }
    }

    /// Null array (`count == -1`).
    pub fn null() -> Self {
        Self::with_count(-1, Vec::new())
    }

    /// Whether the stored count marks a null array.
    pub fn is_null(&self) -> bool {
        self.count < 0
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataValue> {
        self.values.iter()
    }
}

impl BinaryEncodable for DataValueArray {
    fn encoded_len(&self) -> usize {
        4 + self.values.iter().map(DataValue::encoded_len).sum::<usize>()
    }

    fn encode_into(&self, w: &mut WriteCursor<'_>) -> Result<()> {
        w.write_i32(self.count)?;
        for value in &self.values {
            value.encode_into(w)?;
        }
        Ok(())
    }

    fn decode_from(r: &mut ReadCursor<'_>) -> Result<Self> {
        let count = r.read_array_length("DataValueArray")?;
        if count <= 0 {
            if count < 0 {
                warn!(count, "null DataValueArray decoded as empty");
            }
            return Ok(Self::with_count(count, Vec::new()));
        }

        debug!(count, position = r.position(), "decoding DataValueArray");
        let count = count as usize;
        let mut values = Vec::with_capacity(count.min(r.remaining()));
        for _ in 0..count {
            let start = r.position();
            let value = DataValue::decode_from(r)?;
            debug_assert_eq!(
                r.position() - start,
                value.encoded_len(),
                "DataValue consumed length disagrees with encoded_len"
            );
            values.push(value);
        }
        Ok(Self::with_count(count as i32, values))
    }
}

impl From<Vec<DataValue>> for DataValueArray {
    fn from(values: Vec<DataValue>) -> Self {
        Self::new(values)
    }
}

impl<'a> IntoIterator for &'a DataValueArray {
    type Item = &'a DataValue;
    type IntoIter = std::slice::Iter<'a, DataValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
