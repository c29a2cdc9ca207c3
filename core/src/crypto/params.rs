//! crypto/params.rs
//! Connection parameters the record cipher is installed with.

use crate::types::{ProtocolVersion, Role};

/// What the handshake settled on, as far as record protection cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionParameters {
    pub role: Role,
    /// Server-selected version; also written into every record's additional data.
    pub negotiated_version: ProtocolVersion,
}

impl ConnectionParameters {
    pub fn new(role: Role, negotiated_version: ProtocolVersion) -> Self {
        Self { role, negotiated_version }
    }

    pub fn client(negotiated_version: ProtocolVersion) -> Self {
        Self::new(Role::Client, negotiated_version)
    }

    pub fn server(negotiated_version: ProtocolVersion) -> Self {
        Self::new(Role::Server, negotiated_version)
    }

    #[inline]
    pub fn is_server(&self) -> bool {
        self.role.is_server()
    }
}
