//! types.rs
//! Protocol-level enums and identifiers consumed by the record cipher.
//!
//! The record cipher never negotiates any of these; they are handed in by the
//! surrounding handshake and record layer.

use std::fmt;
use num_enum::TryFromPrimitive;

use crate::constants::{content_type_ids, version_ids};

/// Which end of the connection this endpoint is.
///
/// Decides which half of the key block encrypts and which half decrypts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Client,
    Server,
}

impl Role {
    #[inline]
    pub fn is_server(self) -> bool {
        matches!(self, Role::Server)
    }
}

/// TLS record content types (IANA "TLS ContentType" registry).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum ContentType {
    ChangeCipherSpec = content_type_ids::CHANGE_CIPHER_SPEC,
    Alert            = content_type_ids::ALERT,
    Handshake        = content_type_ids::HANDSHAKE,
    ApplicationData  = content_type_ids::APPLICATION_DATA,
    Heartbeat        = content_type_ids::HEARTBEAT,
    Tls12Cid         = content_type_ids::TLS12_CID,
    Ack              = content_type_ids::ACK,
}

impl From<ContentType> for u8 {
    #[inline]
    fn from(ct: ContentType) -> u8 {
        ct as u8
    }
}

/// Negotiated protocol version as it appears on the wire.
///
/// Kept as a raw `u16` newtype rather than an enum: the record layer may hand
/// us any value the peer sent, and the additional data must carry it verbatim.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ProtocolVersion(u16);

impl ProtocolVersion {
    pub const SSLV3: Self   = Self(version_ids::SSL3);
    pub const TLSV1_0: Self = Self(version_ids::TLS10);
    pub const TLSV1_1: Self = Self(version_ids::TLS11);
    pub const TLSV1_2: Self = Self(version_ids::TLS12);
    pub const TLSV1_3: Self = Self(version_ids::TLS13);
    pub const DTLSV1_0: Self = Self(version_ids::DTLS10);
    pub const DTLSV1_2: Self = Self(version_ids::DTLS12);
    pub const DTLSV1_3: Self = Self(version_ids::DTLS13);

    #[inline]
    pub const fn from_u16(raw: u16) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn to_u16(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn major(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn is_dtls(self) -> bool {
        self.major() == 0xFE
    }

    #[inline]
    pub const fn is_tls(self) -> bool {
        self.major() == 0x03
    }

    /// Map DTLS versions onto the TLS version they are derived from.
    ///
    /// DTLS 1.0 is based on TLS 1.1, DTLS 1.2 on TLS 1.2, DTLS 1.3 on TLS 1.3.
    /// Returns `None` for versions that belong to neither family.
    pub fn equivalent_tls_version(self) -> Option<ProtocolVersion> {
        if self.is_tls() {
            return Some(self);
        }
        match self.0 {
            version_ids::DTLS10 => Some(Self::TLSV1_1),
            version_ids::DTLS12 => Some(Self::TLSV1_2),
            version_ids::DTLS13 => Some(Self::TLSV1_3),
            _ => None,
        }
    }

    /// True for TLS 1.2, DTLS 1.2 and anything later.
    pub fn is_tls12_or_later(self) -> bool {
        matches!(self.equivalent_tls_version(), Some(v) if v.0 >= version_ids::TLS12)
    }

    fn name(self) -> Option<&'static str> {
        match self.0 {
            version_ids::SSL3 => Some("SSLv3"),
            version_ids::TLS10 => Some("TLSv1.0"),
            version_ids::TLS11 => Some("TLSv1.1"),
            version_ids::TLS12 => Some("TLSv1.2"),
            version_ids::TLS13 => Some("TLSv1.3"),
            version_ids::DTLS10 => Some("DTLSv1.0"),
            version_ids::DTLS12 => Some("DTLSv1.2"),
            version_ids::DTLS13 => Some("DTLSv1.3"),
            _ => None,
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:04x}", self.0),
        }
    }
}

impl fmt::Debug for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProtocolVersion({self})")
    }
}

/// TLS alert descriptions this layer can raise or needs to name (RFC 5246 §7.2).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum AlertDescription {
    CloseNotify          = 0,
    UnexpectedMessage    = 10,
    BadRecordMac         = 20,
    DecryptionFailed     = 21,
    RecordOverflow       = 22,
    HandshakeFailure     = 40,
    IllegalParameter     = 47,
    DecodeError          = 50,
    DecryptError         = 51,
    ProtocolVersion      = 70,
    InsufficientSecurity = 71,
    InternalError        = 80,
}

impl AlertDescription {
    #[inline]
    pub fn to_u8(self) -> u8 {
        self as u8
    }
}
