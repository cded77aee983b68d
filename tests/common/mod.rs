// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use uacodec::{
    DataValue, NodeId, RequestHeader, Variant, WriteRequest, WriteValue,
    types::AttributeId,
};

// ============================================================================
// DataValue fixture
// ============================================================================

/// 2018-09-17T14:28:29.112Z
pub fn value_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 9, 17, 14, 28, 29).unwrap() + Duration::milliseconds(112)
}

/// Float value with both timestamps.
pub fn float_data_value() -> DataValue {
    DataValue::builder()
        .value(Variant::Float(2.50017))
        .source_timestamp(value_time())
        .server_timestamp(value_time())
        .build()
}

pub const FLOAT_DATA_VALUE: [u8; 22] = [
    0x0d, 0x0a, 0xc9, 0x02, 0x20, 0x40, 0x80, 0x3b, 0xe8, 0xb3, 0x92, 0x4e, 0xd4, 0x01, 0x80,
    0x3b, 0xe8, 0xb3, 0x92, 0x4e, 0xd4, 0x01,
];

// ============================================================================
// WriteRequest fixture
// ============================================================================

pub fn request_header() -> RequestHeader {
    RequestHeader::new(
        NodeId::opaque(
            0,
            vec![
                0x08, 0x22, 0x87, 0x62, 0xba, 0x81, 0xe1, 0x11, 0xa6, 0x43, 0xf8, 0x77, 0x7b,
                0xc6, 0x2f, 0xc8,
            ],
        ),
        Utc.with_ymd_and_hms(2018, 8, 10, 23, 0, 0).unwrap(),
        1,
    )
}

pub fn float_write_value() -> WriteValue {
    WriteValue::new(
        NodeId::FourByte {
            namespace: 0,
            id: 2256,
        },
        AttributeId::Value,
        None,
        float_data_value(),
    )
}

pub fn write_request(nodes: usize) -> WriteRequest {
    WriteRequest::new(request_header(), vec![float_write_value(); nodes])
}

/// Encoded WriteRequest carrying `nodes` copies of the float WriteValue.
pub fn write_request_bytes(nodes: u8) -> Vec<u8> {
    let mut bytes = vec![
        // TypeID
        0x01, 0x00, 0xa1, 0x02,
        // AuthenticationToken
        0x05, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x08, 0x22, 0x87, 0x62, 0xba, 0x81, 0xe1,
        0x11, 0xa6, 0x43, 0xf8, 0x77, 0x7b, 0xc6, 0x2f, 0xc8,
        // Timestamp
        0x00, 0x98, 0x67, 0xdd, 0xfd, 0x30, 0xd4, 0x01,
        // RequestHandle
        0x01, 0x00, 0x00, 0x00,
        // ReturnDiagnostics
        0x00, 0x00, 0x00, 0x00,
        // AuditEntryID
        0xff, 0xff, 0xff, 0xff,
        // TimeoutHint
        0x00, 0x00, 0x00, 0x00,
        // AdditionalHeader
        0x00, 0x00, 0x00,
        // NodesToWrite ArraySize
        nodes, 0x00, 0x00, 0x00,
    ];
    for _ in 0..nodes {
        bytes.extend_from_slice(&[
            // NodeID
            0x01, 0x00, 0xd0, 0x08,
            // AttributeID
            0x0d, 0x00, 0x00, 0x00,
            // IndexRange
            0xff, 0xff, 0xff, 0xff,
        ]);
        bytes.extend_from_slice(&FLOAT_DATA_VALUE);
    }
    bytes
}
