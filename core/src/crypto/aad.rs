//! crypto/aad.rs
//! TLS 1.2 additional data bound into each record tag.
//!
//! ```text
//! additional_data = seq_num(8) || TLSCompressed.type(1) ||
//!                   TLSCompressed.version(2) || TLSCompressed.length(2)
//! ```
//! All multi-byte fields are big-endian. `length` is the plaintext length,
//! so encoder and decoder compute identical bytes.

use byteorder::{BigEndian, ByteOrder};

use crate::crypto::types::AAD_LEN;
use crate::types::ProtocolVersion;

#[inline]
pub fn build_additional_data(
    seq_no: u64,
    content_type: u8,
    version: ProtocolVersion,
    plaintext_len: u16,
) -> [u8; AAD_LEN] {
    let mut ad = [0u8; AAD_LEN];
    BigEndian::write_u64(&mut ad[0..8], seq_no);
    ad[8] = content_type;
    BigEndian::write_u16(&mut ad[9..11], version.to_u16());
    BigEndian::write_u16(&mut ad[11..13], plaintext_len);
    ad
}
