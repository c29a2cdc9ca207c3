//! crypto/types.rs
//! Fixed sizes of the RFC 7905 construction and the record cipher error type.

use thiserror::Error;

use crate::types::AlertDescription;

/// ChaCha20 key length (bytes).
pub const KEY_LEN_32: usize = 32;

/// ChaCha20 nonce length (IETF variant, RFC 8439).
pub const NONCE_LEN_12: usize = 12;

/// Poly1305 tag length (bytes). Every protected record carries exactly one.
pub const TAG_LEN: usize = 16;

/// Poly1305 one-time key length (bytes).
pub const MAC_KEY_LEN: usize = 32;

/// TLS 1.2 `fixed_iv_length` for ChaCha20-Poly1305. No explicit record IV is sent.
pub const FIXED_IV_LEN: usize = 12;

/// Key block: client key, server key, client IV, server IV.
pub const KEY_BLOCK_LEN: usize = 2 * KEY_LEN_32 + 2 * FIXED_IV_LEN;

/// Keystream bytes burned in front of the payload: exactly one ChaCha20 block,
/// so the payload starts at block counter 1.
pub const KEYSTREAM_PREFIX_LEN: usize = 64;

/// TLS 1.2 additional data: seq_num(8) + type(1) + version(2) + length(2).
pub const AAD_LEN: usize = 13;

/// Fatal record cipher errors.
///
/// Every variant is terminal for the connection; the caller sends the alert
/// returned by [`CipherError::alert`] and stops processing records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Misconfiguration or misuse: unsupported version, bad key block,
    /// capability used without a key, oversized plaintext.
    #[error("internal error: {reason}")]
    Internal { reason: String },

    /// Ciphertext cannot hold a tag, or is too long for a TLS record.
    #[error("decode error: malformed ciphertext of {len} bytes")]
    Decode { len: usize },

    /// Tag mismatch. Deliberately carries no detail.
    #[error("bad record MAC")]
    BadRecordMac,
}

impl CipherError {
    #[inline]
    pub(crate) fn internal(reason: impl Into<String>) -> Self {
        CipherError::Internal { reason: reason.into() }
    }

    /// The fatal TLS alert matching this error.
    pub fn alert(&self) -> AlertDescription {
        match self {
            CipherError::Internal { .. } => AlertDescription::InternalError,
            CipherError::Decode { .. } => AlertDescription::DecodeError,
            CipherError::BadRecordMac => AlertDescription::BadRecordMac,
        }
    }
}
