// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! WriteRequest fixture tests.
//!
//! DataValues travel inside WriteRequests; these byte-exact fixtures check
//! that the record layout composes with the surrounding message.

mod common;

use common::{write_request, write_request_bytes};
use uacodec::{BinaryEncodable, CodecError, ServiceType, WriteRequest};

#[test]
fn test_single_write_value_encode() {
    let req = write_request(1);
    let expected = write_request_bytes(1);
    assert_eq!(req.encoded_len(), expected.len());
    assert_eq!(req.to_bytes().unwrap(), expected);
}

#[test]
fn test_single_write_value_decode() {
    let decoded = WriteRequest::decode(&write_request_bytes(1)).unwrap();
    assert_eq!(decoded, write_request(1));
}

#[test]
fn test_multiple_write_values_encode() {
    let req = write_request(2);
    assert_eq!(req.to_bytes().unwrap(), write_request_bytes(2));
}

#[test]
fn test_multiple_write_values_decode() {
    let decoded = WriteRequest::decode(&write_request_bytes(2)).unwrap();
    assert_eq!(decoded.nodes_to_write.len(), 2);
    assert_eq!(decoded, write_request(2));
}

#[test]
fn test_multiple_write_values_duplicate_element() {
    let one = write_request_bytes(1);
    let two = write_request_bytes(2);
    // the second request is the first plus one more 34-byte WriteValue
    assert_eq!(two.len(), one.len() + 34);
    assert_eq!(&two[two.len() - 22..], &one[one.len() - 22..]);
}

#[test]
fn test_service_id() {
    assert_eq!(WriteRequest::SERVICE_TYPE.id(), 673);
    assert_eq!(write_request(0).service_type(), ServiceType::WriteRequest);
}

#[test]
fn test_truncated_request() {
    let bytes = write_request_bytes(1);
    let err = WriteRequest::decode(&bytes[..bytes.len() - 1]).unwrap_err();
    assert!(matches!(err, CodecError::TruncatedInput { .. }));
}
