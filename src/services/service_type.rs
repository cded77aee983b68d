// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Binary encoding identifiers of service messages.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::NodeId;

/// Service message kinds and their `DefaultBinary` encoding ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    ReadRequest,
    ReadResponse,
    WriteRequest,
    WriteResponse,
}

impl ServiceType {
    /// All known service types.
    pub const ALL: [ServiceType; 4] = [
        ServiceType::ReadRequest,
        ServiceType::ReadResponse,
        ServiceType::WriteRequest,
        ServiceType::WriteResponse,
    ];

    /// Numeric encoding id in namespace 0.
    pub const fn id(self) -> u16 {
        match self {
            ServiceType::ReadRequest => 631,
            ServiceType::ReadResponse => 634,
            ServiceType::WriteRequest => 673,
            ServiceType::WriteResponse => 676,
        }
    }

    /// Look up a service type by encoding id.
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| u32::from(ty.id()) == id)
    }

    /// Type id NodeId written ahead of the message body.
    pub fn type_id(self) -> NodeId {
        NodeId::FourByte {
            namespace: 0,
            id: self.id(),
        }
    }

    /// Resolve the type id NodeId read ahead of a message body.
    pub fn from_type_id(node_id: &NodeId) -> Option<Self> {
        if node_id.namespace() != 0 {
            return None;
        }
        node_id.as_numeric().and_then(Self::from_id)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceType::ReadRequest => "ReadRequest",
            ServiceType::ReadResponse => "ReadResponse",
            ServiceType::WriteRequest => "WriteRequest",
            ServiceType::WriteResponse => "WriteResponse",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids() {
        assert_eq!(ServiceType::WriteRequest.id(), 673);
        assert_eq!(ServiceType::from_id(676), Some(ServiceType::WriteResponse));
        assert_eq!(ServiceType::from_id(1), None);
    }

    #[test]
    fn test_type_id_round_trip() {
        for ty in ServiceType::ALL {
            assert_eq!(ServiceType::from_type_id(&ty.type_id()), Some(ty));
        }
        assert_eq!(
            ServiceType::from_type_id(&NodeId::numeric(1, 673)),
            None
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ServiceType::WriteRequest.to_string(), "WriteRequest (673)");
    }
}
