// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout uacodec.
//!
//! - [`CodecError`] - Error taxonomy shared by every codec
//! - [`Result`] - Crate-wide result alias

pub mod error;

pub use error::{CodecError, Result};
