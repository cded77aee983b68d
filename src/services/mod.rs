// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Service messages that carry DataValues.

pub mod request_header;
pub mod service_type;
pub mod write_request;

pub use request_header::RequestHeader;
pub use service_type::ServiceType;
pub use write_request::WriteRequest;
