// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decoding limits.
//!
//! Every length prefix read from the wire (array counts, string and byte
//! string lengths) is checked against [`DecodingOptions`] before anything is
//! allocated for it. Options can be built in code or loaded from TOML:
//!
//! ```toml
//! max_array_length = 1000
//! max_string_length = 4096
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default maximum element count for any array.
pub const DEFAULT_MAX_ARRAY_LENGTH: usize = 100_000;

/// Default maximum byte length of a UA String.
pub const DEFAULT_MAX_STRING_LENGTH: usize = 65_535;

/// Default maximum byte length of a UA ByteString.
pub const DEFAULT_MAX_BYTE_STRING_LENGTH: usize = 1_048_576;

/// Errors raised while loading decoding options.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid decoding options: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Limits applied while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodingOptions {
    /// Maximum element count for DataValue arrays, Variant arrays and
    /// service-level arrays.
    pub max_array_length: usize,
    /// Maximum byte length of a UA String.
    pub max_string_length: usize,
    /// Maximum byte length of a UA ByteString.
    pub max_byte_string_length: usize,
}

impl Default for DecodingOptions {
    fn default() -> Self {
        Self {
            max_array_length: DEFAULT_MAX_ARRAY_LENGTH,
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
            max_byte_string_length: DEFAULT_MAX_BYTE_STRING_LENGTH,
        }
    }
}

impl DecodingOptions {
    /// Parse options from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Set the maximum array length.
    #[must_use]
    pub fn with_max_array_length(mut self, limit: usize) -> Self {
        self.max_array_length = limit;
        self
    }

    /// Set the maximum UA String length.
    #[must_use]
    pub fn with_max_string_length(mut self, limit: usize) -> Self {
        self.max_string_length = limit;
        self
    }

    /// Set the maximum UA ByteString length.
    #[must_use]
    pub fn with_max_byte_string_length(mut self, limit: usize) -> Self {
        self.max_byte_string_length = limit;
        self
    }
}
