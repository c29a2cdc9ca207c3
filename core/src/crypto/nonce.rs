//! crypto/nonce.rs
//! Per-record nonce derivation from the implicit sequence number (RFC 7905 §2).
//!
//! Design:
//! - The 64-bit record sequence number is written big-endian into the last
//!   8 bytes of a zeroed 12-byte buffer, then XORed with the fixed IV from the
//!   key block. The first 4 IV bytes pass through unchanged.
//! - No nonce is transmitted; both ends derive it from their own counters.
//!
//! Security notes:
//! - A (fixed_iv, seq_no) pair must never repeat under one key. The sequence
//!   counter belongs to the record layer, which must never rewind it.

use byteorder::{BigEndian, ByteOrder};

use crate::crypto::types::{FIXED_IV_LEN, NONCE_LEN_12};

/// Derive the 12-byte ChaCha20 nonce for record `seq_no`.
///
/// `nonce = fixed_iv XOR (0x00000000 || seq_no as u64 big-endian)`.
/// Pure and infallible; distinct sequence numbers give distinct nonces.
#[inline]
pub fn derive_nonce(seq_no: u64, fixed_iv: &[u8; FIXED_IV_LEN]) -> [u8; NONCE_LEN_12] {
    let mut nonce = [0u8; NONCE_LEN_12];
    BigEndian::write_u64(&mut nonce[4..], seq_no);

    for (n, iv) in nonce.iter_mut().zip(fixed_iv.iter()) {
        *n ^= iv;
    }

    nonce
}
