//! RustCrypto-backed implementations of the primitive capabilities.

use chacha20::cipher::{KeyIvInit, StreamCipher as _};
use chacha20::ChaCha20;
use poly1305::universal_hash::{KeyInit, UniversalHash};
use poly1305::Poly1305;
use zeroize::{Zeroize, Zeroizing};

use crate::crypto::primitives::{RecordMac, StreamCipher};
use crate::crypto::types::{CipherError, KEY_LEN_32, MAC_KEY_LEN, NONCE_LEN_12, TAG_LEN};

const POLY1305_BLOCK_LEN: usize = 16;

// ---- ChaCha20 ----

/// ChaCha20 (RFC 8439, 96-bit nonce, 32-bit block counter).
///
/// Keeps a zeroizing copy of the key so the keystream can be restarted for
/// every record nonce.
#[derive(Default)]
pub struct ChaCha20Stream {
    key: Option<Zeroizing<[u8; KEY_LEN_32]>>,
    cipher: Option<ChaCha20>,
}

impl ChaCha20Stream {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StreamCipher for ChaCha20Stream {
    const KEY_LEN: usize = KEY_LEN_32;
    const NONCE_LEN: usize = NONCE_LEN_12;

    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() != Self::KEY_LEN {
            return Err(CipherError::internal(format!(
                "ChaCha20 key must be {} bytes, got {}",
                Self::KEY_LEN,
                key.len()
            )));
        }
        let mut stored = Zeroizing::new([0u8; KEY_LEN_32]);
        stored.copy_from_slice(key);
        self.key = Some(stored);
        self.cipher = None;
        Ok(())
    }

    fn init(&mut self, nonce: &[u8]) -> Result<(), CipherError> {
        if nonce.len() != Self::NONCE_LEN {
            return Err(CipherError::internal(format!(
                "ChaCha20 nonce must be {} bytes, got {}",
                Self::NONCE_LEN,
                nonce.len()
            )));
        }
        let key = self
            .key
            .as_deref()
            .ok_or_else(|| CipherError::internal("ChaCha20 initialised before a key was set"))?;
        self.cipher = Some(ChaCha20::new(
            chacha20::Key::from_slice(key),
            chacha20::Nonce::from_slice(nonce),
        ));
        Ok(())
    }

    fn apply_keystream(&mut self, buf: &mut [u8]) -> Result<(), CipherError> {
        let cipher = self
            .cipher
            .as_mut()
            .ok_or_else(|| CipherError::internal("ChaCha20 used before a nonce was set"))?;
        cipher.apply_keystream(buf);
        Ok(())
    }
}

// ---- Poly1305 ----

/// Poly1305 one-time authenticator (RFC 8439 §2.5).
///
/// The underlying crate absorbs whole 16-byte blocks only, so a partial block
/// is buffered between `update` calls. The trailing partial block (if any) is
/// processed unpadded at `finalize`, matching plain Poly1305.
pub struct Poly1305Mac {
    state: Option<Poly1305>,
    partial: Zeroizing<[u8; POLY1305_BLOCK_LEN]>,
    partial_len: usize,
}

impl Default for Poly1305Mac {
    fn default() -> Self {
        Self {
            state: None,
            partial: Zeroizing::new([0u8; POLY1305_BLOCK_LEN]),
            partial_len: 0,
        }
    }
}

impl Poly1305Mac {
    pub fn new() -> Self {
        Self::default()
    }

    fn reset_partial(&mut self) {
        self.partial.zeroize();
        self.partial_len = 0;
    }
}

impl RecordMac for Poly1305Mac {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() != MAC_KEY_LEN {
            return Err(CipherError::internal(format!(
                "Poly1305 key must be {} bytes, got {}",
                MAC_KEY_LEN,
                key.len()
            )));
        }
        self.state = Some(Poly1305::new(poly1305::Key::from_slice(key)));
        self.reset_partial();
        Ok(())
    }

    fn update(&mut self, mut data: &[u8]) -> Result<(), CipherError> {
        let state = self
            .state
            .as_mut()
            .ok_or_else(|| CipherError::internal("Poly1305 updated before a key was set"))?;

        if self.partial_len > 0 {
            let take = (POLY1305_BLOCK_LEN - self.partial_len).min(data.len());
            self.partial[self.partial_len..self.partial_len + take].copy_from_slice(&data[..take]);
            self.partial_len += take;
            data = &data[take..];

            if self.partial_len < POLY1305_BLOCK_LEN {
                return Ok(());
            }
            state.update(&[*poly1305::Block::from_slice(&self.partial[..])]);
            self.partial_len = 0;
        }

        let mut blocks = data.chunks_exact(POLY1305_BLOCK_LEN);
        for block in &mut blocks {
            state.update(&[*poly1305::Block::from_slice(block)]);
        }

        let rest = blocks.remainder();
        self.partial[..rest.len()].copy_from_slice(rest);
        self.partial_len = rest.len();
        Ok(())
    }

    fn finalize(&mut self) -> Result<[u8; TAG_LEN], CipherError> {
        let state = self
            .state
            .take()
            .ok_or_else(|| CipherError::internal("Poly1305 finalized before a key was set"))?;
        let tag = state.compute_unpadded(&self.partial[..self.partial_len]);
        self.reset_partial();

        let mut out = [0u8; TAG_LEN];
        out.copy_from_slice(&tag);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chacha20_requires_key_before_nonce() {
        let mut stream = ChaCha20Stream::new();
        assert!(matches!(stream.init(&[0u8; 12]), Err(CipherError::Internal { .. })));
    }

    #[test]
    fn chacha20_requires_nonce_before_keystream() {
        let mut stream = ChaCha20Stream::new();
        stream.set_key(&[7u8; 32]).unwrap();
        let mut buf = [0u8; 8];
        assert!(stream.apply_keystream(&mut buf).is_err());
    }

    #[test]
    fn chacha20_rejects_wrong_lengths() {
        let mut stream = ChaCha20Stream::new();
        assert!(stream.set_key(&[0u8; 16]).is_err());
        stream.set_key(&[0u8; 32]).unwrap();
        assert!(stream.init(&[0u8; 8]).is_err());
    }

    #[test]
    fn poly1305_requires_key() {
        let mut mac = Poly1305Mac::new();
        assert!(mac.update(b"data").is_err());
        assert!(mac.finalize().is_err());
    }

    #[test]
    fn poly1305_forgets_key_after_finalize() {
        let mut mac = Poly1305Mac::new();
        mac.set_key(&[1u8; 32]).unwrap();
        mac.update(b"abc").unwrap();
        mac.finalize().unwrap();
        assert!(mac.update(b"abc").is_err());
    }
}
