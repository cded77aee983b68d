// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! OPC UA data types.
//!
//! - [`DataValue`] / [`DataValueArray`] - value records with presence mask
//! - [`Variant`] - tagged value embedded in a DataValue
//! - [`date_time`] - 100ns tick timestamps
//! - [`NodeId`], [`ExtensionObject`], [`WriteValue`] - request building blocks

pub mod data_value;
pub mod data_value_array;
pub mod date_time;
pub mod extension_object;
pub mod mask;
pub mod node_id;
pub mod variant;
pub mod write_value;

pub use data_value::{DataValue, DataValueBuilder};
pub use data_value_array::DataValueArray;
pub use extension_object::{BodyEncoding, ExtensionObject};
pub use mask::{DataValueField, DataValueMask};
pub use node_id::NodeId;
pub use variant::{Variant, VariantArray, VariantType};
pub use write_value::{AttributeId, WriteValue};
