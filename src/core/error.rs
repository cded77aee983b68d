// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for uacodec.
//!
//! Provides error types for binary codec operations:
//! - Input truncation while decoding
//! - Undersized output buffers while encoding
//! - Failures raised by the Variant, DateTime and NodeId codecs
//! - Decoding limit violations

use std::fmt;

/// Errors that can occur while encoding or decoding OPC UA binary data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A decode step needs more bytes than the input provides
    TruncatedInput {
        /// Requested bytes
        requested: usize,
        /// Available bytes
        available: usize,
        /// Cursor position when the read was attempted
        position: usize,
    },

    /// The destination buffer is shorter than the encoded form
    OutputTooSmall {
        /// Bytes the write needed
        required: usize,
        /// Bytes left in the destination
        available: usize,
        /// Cursor position when the write was attempted
        position: usize,
    },

    /// Variant encoding byte or payload is not supported
    InvalidVariant {
        /// Raw encoding byte
        encoding_mask: u8,
        /// Why it was rejected
        reason: String,
    },

    /// DateTime tick count cannot be represented
    InvalidTimestamp {
        /// Raw 100ns tick count
        ticks: i64,
    },

    /// Unknown NodeId encoding byte
    InvalidNodeId {
        /// Raw encoding byte
        encoding: u8,
    },

    /// String payload is not valid UTF-8
    InvalidString {
        /// Position of the string payload
        position: usize,
        /// Underlying error
        reason: String,
    },

    /// Length prefix exceeded the configured decoding limit
    LengthExceeded {
        /// What was being decoded
        what: String,
        /// Length that was read
        length: usize,
        /// Configured limit
        limit: usize,
    },

    /// Service message carried an unexpected type identifier
    UnexpectedType {
        /// Expected type identifier
        expected: String,
        /// Type identifier found on the wire
        actual: String,
    },

    /// Other error
    Other(String),
}

impl CodecError {
    /// Create a truncated input error.
    pub fn truncated(requested: usize, available: usize, position: usize) -> Self {
        CodecError::TruncatedInput {
            requested,
            available,
            position,
        }
    }

    /// Create an output too small error.
    pub fn output_too_small(required: usize, available: usize, position: usize) -> Self {
        CodecError::OutputTooSmall {
            required,
            available,
            position,
        }
    }

    /// Create an invalid variant error.
    pub fn invalid_variant(encoding_mask: u8, reason: impl Into<String>) -> Self {
        CodecError::InvalidVariant {
            encoding_mask,
            reason: reason.into(),
        }
    }

    /// Create an invalid timestamp error.
    pub fn invalid_timestamp(ticks: i64) -> Self {
        CodecError::InvalidTimestamp { ticks }
    }

    /// Create an invalid node id error.
    pub fn invalid_node_id(encoding: u8) -> Self {
        CodecError::InvalidNodeId { encoding }
    }

    /// Create an invalid string error.
    pub fn invalid_string(position: usize, reason: impl Into<String>) -> Self {
        CodecError::InvalidString {
            position,
            reason: reason.into(),
        }
    }

    /// Create a length exceeded error.
    pub fn length_exceeded(what: impl Into<String>, length: usize, limit: usize) -> Self {
        CodecError::LengthExceeded {
            what: what.into(),
            length,
            limit,
        }
    }

    /// Create an unexpected type error.
    pub fn unexpected_type(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        CodecError::UnexpectedType {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Whether the error came from running out of input.
    pub fn is_truncated(&self) -> bool {
        matches!(self, CodecError::TruncatedInput { .. })
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::TruncatedInput {
                requested,
                available,
                position,
            } => vec![
                ("requested", requested.to_string()),
                ("available", available.to_string()),
                ("position", position.to_string()),
            ],
            CodecError::OutputTooSmall {
                required,
                available,
                position,
            } => vec![
                ("required", required.to_string()),
                ("available", available.to_string()),
                ("position", position.to_string()),
            ],
            CodecError::InvalidVariant {
                encoding_mask,
                reason,
            } => vec![
                ("encoding_mask", format!("0x{encoding_mask:02x}")),
                ("reason", reason.clone()),
            ],
            CodecError::InvalidTimestamp { ticks } => vec![("ticks", ticks.to_string())],
            CodecError::InvalidNodeId { encoding } => {
                vec![("encoding", format!("0x{encoding:02x}"))]
            }
            CodecError::InvalidString { position, reason } => {
                vec![("position", position.to_string()), ("reason", reason.clone())]
            }
            CodecError::LengthExceeded {
                what,
                length,
                limit,
            } => vec![
                ("what", what.clone()),
                ("length", length.to_string()),
                ("limit", limit.to_string()),
            ],
            CodecError::UnexpectedType { expected, actual } => {
                vec![("expected", expected.clone()), ("actual", actual.clone())]
            }
            CodecError::Other(msg) => vec![("message", msg.clone())],
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::TruncatedInput {
                requested,
                available,
                position,
            } => write!(
                f,
                "Truncated input: requested {requested} bytes at position {position}, but only {available} bytes available"
            ),
            CodecError::OutputTooSmall {
                required,
                available,
                position,
            } => write!(
                f,
                "Output too small: writing {required} bytes at position {position}, but only {available} bytes left"
            ),
            CodecError::InvalidVariant {
                encoding_mask,
                reason,
            } => write!(f, "Invalid variant (mask 0x{encoding_mask:02x}): {reason}"),
            CodecError::InvalidTimestamp { ticks } => {
                write!(f, "Invalid timestamp: {ticks} ticks cannot be represented")
            }
            CodecError::InvalidNodeId { encoding } => {
                write!(f, "Invalid node id encoding: 0x{encoding:02x}")
            }
            CodecError::InvalidString { position, reason } => {
                write!(f, "Invalid string at position {position}: {reason}")
            }
            CodecError::LengthExceeded {
                what,
                length,
                limit,
            } => write!(f, "{what} length {length} exceeds limit {limit}"),
            CodecError::UnexpectedType { expected, actual } => {
                write!(f, "Unexpected type id: expected {expected}, got {actual}")
            }
            CodecError::Other(msg) => write!(f, "Other error: {msg}"),
        }
    }
}

impl std::error::Error for CodecError {}

/// Result type for uacodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_error() {
        let err = CodecError::truncated(4, 2, 9);
        assert!(err.is_truncated());
        assert_eq!(
            err.to_string(),
            "Truncated input: requested 4 bytes at position 9, but only 2 bytes available"
        );
    }

    #[test]
    fn test_output_too_small_error() {
        let err = CodecError::output_too_small(8, 3, 5);
        assert!(!err.is_truncated());
        assert_eq!(
            err.to_string(),
            "Output too small: writing 8 bytes at position 5, but only 3 bytes left"
        );
    }

    #[test]
    fn test_invalid_variant_error() {
        let err = CodecError::invalid_variant(0x4a, "array dimensions are not supported");
        assert_eq!(
            err.to_string(),
            "Invalid variant (mask 0x4a): array dimensions are not supported"
        );
    }

    #[test]
    fn test_invalid_node_id_error() {
        let err = CodecError::invalid_node_id(0x07);
        assert_eq!(err.to_string(), "Invalid node id encoding: 0x07");
    }

    #[test]
    fn test_length_exceeded_error() {
        let err = CodecError::length_exceeded("DataValueArray", 500, 100);
        assert_eq!(err.to_string(), "DataValueArray length 500 exceeds limit 100");
    }

    #[test]
    fn test_log_fields_truncated() {
        let fields = CodecError::truncated(8, 1, 12).log_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], ("requested", "8".to_string()));
        assert_eq!(fields[1], ("available", "1".to_string()));
        assert_eq!(fields[2], ("position", "12".to_string()));
    }

    #[test]
    fn test_log_fields_variant() {
        let fields = CodecError::invalid_variant(0x16, "unsupported type id 22").log_fields();
        assert_eq!(fields[0], ("encoding_mask", "0x16".to_string()));
        assert_eq!(fields[1].1, "unsupported type id 22");
    }

    #[test]
    fn test_log_fields_other() {
        let fields = CodecError::Other("msg".to_string()).log_fields();
        assert_eq!(fields, vec![("message", "msg".to_string())]);
    }
}
