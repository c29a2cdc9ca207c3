//! crypto/primitives.rs
//! Capability traits for the two primitives the record cipher is built from.
//!
//! Design notes:
//! - The record cipher only needs a keyed stream cipher that can be re-pointed
//!   at a new nonce, and an incremental one-time MAC. Anything implementing
//!   these can back it (software via RustCrypto, or hardware).
//! - Instances are owned per direction. Nothing here is shared between the
//!   encrypt and decrypt sides of a connection.

use crate::crypto::types::{CipherError, TAG_LEN};

/// Keyed stream cipher with XOR-with-keystream semantics.
pub trait StreamCipher {
    /// Key length in bytes.
    const KEY_LEN: usize;
    /// Nonce length in bytes.
    const NONCE_LEN: usize;

    /// Install the long-term key. Discards any running keystream.
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError>;

    /// Restart the keystream at block counter 0 for `nonce`.
    fn init(&mut self, nonce: &[u8]) -> Result<(), CipherError>;

    /// XOR the next `buf.len()` keystream bytes into `buf`.
    fn apply_keystream(&mut self, buf: &mut [u8]) -> Result<(), CipherError>;
}

/// Incremental one-time authenticator producing a 16-byte tag.
pub trait RecordMac {
    /// Install a fresh one-time key. Drops any partially absorbed input.
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError>;

    /// Absorb `data`. Chunk boundaries do not affect the tag.
    fn update(&mut self, data: &[u8]) -> Result<(), CipherError>;

    /// Produce the tag and forget the key. A new `set_key` is required after.
    fn finalize(&mut self) -> Result<[u8; TAG_LEN], CipherError>;

    #[inline]
    fn mac_length(&self) -> usize {
        TAG_LEN
    }
}
