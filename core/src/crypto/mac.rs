//! crypto/mac.rs
//! Poly1305 AEAD input assembly (RFC 8439 §2.8).
//!
//! The authenticator sees, in order:
//! 1. additional data, then zeros up to a 16-byte boundary
//! 2. ciphertext, then zeros up to a 16-byte boundary
//! 3. length of the additional data, u64 little-endian
//! 4. length of the ciphertext, u64 little-endian
//!
//! Padding is computed independently for the two segments and is empty when a
//! segment is already aligned. The 13-byte TLS additional data always gets 3.

use byteorder::{ByteOrder, LittleEndian};

use crate::crypto::primitives::RecordMac;
use crate::crypto::types::{CipherError, TAG_LEN};
use crate::utils::pad16_len;

const ZEROES: [u8; 15] = [0u8; 15];

/// Feed `data` followed by its pad16 zeros.
pub fn update_record_mac_text<M: RecordMac + ?Sized>(
    mac: &mut M,
    data: &[u8],
) -> Result<(), CipherError> {
    mac.update(data)?;

    let pad = pad16_len(data.len());
    if pad != 0 {
        mac.update(&ZEROES[..pad])?;
    }
    Ok(())
}

/// Feed a segment length as a little-endian u64.
pub fn update_record_mac_length<M: RecordMac + ?Sized>(
    mac: &mut M,
    len: usize,
) -> Result<(), CipherError> {
    let mut encoded = [0u8; 8];
    LittleEndian::write_u64(&mut encoded, len as u64);
    mac.update(&encoded)
}

/// Compute the record tag over `additional_data` and `ciphertext`.
///
/// `mac` must already hold this record's one-time key; it is spent afterwards.
pub fn calculate_record_mac<M: RecordMac + ?Sized>(
    mac: &mut M,
    additional_data: &[u8],
    ciphertext: &[u8],
) -> Result<[u8; TAG_LEN], CipherError> {
    update_record_mac_text(mac, additional_data)?;
    update_record_mac_text(mac, ciphertext)?;
    update_record_mac_length(mac, additional_data.len())?;
    update_record_mac_length(mac, ciphertext.len())?;

    mac.finalize()
}
