//! crypto/cipher.rs
//! ChaCha20-Poly1305 record protection for TLS 1.2 (RFC 7905).
//!
//! Design notes:
//! - Keys and fixed IVs come from an 88-byte key block: client key, server
//!   key, client IV, server IV. Which pair encrypts depends on the role.
//! - Nonces are implicit: fixed IV XOR record sequence number.
//! - The Poly1305 key is the first 32 bytes of keystream at block counter 0.
//!   The stream capability has no counter control, so each record runs the
//!   cipher over `64 zero bytes || payload` in one pass: the first block
//!   yields raw keystream (the one-time key), the rest is the real
//!   ciphertext/plaintext starting at counter 1.
//! - Decryption always completes before the tag check, because the MAC key
//!   itself comes out of the decrypt keystream. Plaintext is only released
//!   after a constant-time tag comparison succeeds.
//! - Work buffers and the key block are `Zeroizing`, so they are wiped on
//!   every exit path including errors.

use subtle::ConstantTimeEq;
use tracing::{debug, trace, warn};
use zeroize::Zeroizing;

use crate::crypto::aad::build_additional_data;
use crate::crypto::kdf::KeyBlockSource;
use crate::crypto::mac::calculate_record_mac;
use crate::crypto::nonce::derive_nonce;
use crate::crypto::params::ConnectionParameters;
use crate::crypto::primitives::{RecordMac, StreamCipher};
use crate::crypto::rustcrypto::{ChaCha20Stream, Poly1305Mac};
use crate::crypto::types::{
    CipherError, FIXED_IV_LEN, KEYSTREAM_PREFIX_LEN, KEY_BLOCK_LEN, KEY_LEN_32, MAC_KEY_LEN, TAG_LEN,
};
use crate::types::{ContentType, ProtocolVersion, Role};
use crate::utils::enum_name_or_hex;

/// Record cipher wired to the RustCrypto ChaCha20 and Poly1305 capabilities.
pub type RustCryptoRecordCipher = ChaCha20Poly1305Cipher<ChaCha20Stream, Poly1305Mac>;

/// Connection cipher state: one encrypt side and one decrypt side.
///
/// Calls on one side must be serialized; `&mut self` enforces that. Use
/// [`ChaCha20Poly1305Cipher::split`] to drive the two directions from
/// different threads.
pub struct ChaCha20Poly1305Cipher<S: StreamCipher, M: RecordMac> {
    role: Role,
    encrypt: EncryptHalf<S, M>,
    decrypt: DecryptHalf<S, M>,
}

/// Outgoing direction: encrypt cipher, write MAC, encrypt IV.
pub struct EncryptHalf<S: StreamCipher, M: RecordMac> {
    cipher: S,
    mac: M,
    iv: Zeroizing<[u8; FIXED_IV_LEN]>,
    version: ProtocolVersion,
}

/// Incoming direction: decrypt cipher, read MAC, decrypt IV.
pub struct DecryptHalf<S: StreamCipher, M: RecordMac> {
    cipher: S,
    mac: M,
    iv: Zeroizing<[u8; FIXED_IV_LEN]>,
    version: ProtocolVersion,
}

impl RustCryptoRecordCipher {
    /// Install the cipher with fresh RustCrypto capability instances.
    pub fn with_rustcrypto<K: KeyBlockSource + ?Sized>(
        params: &ConnectionParameters,
        key_source: &K,
    ) -> Result<Self, CipherError> {
        Self::new(
            params,
            key_source,
            ChaCha20Stream::new(),
            ChaCha20Stream::new(),
            Poly1305Mac::new(),
            Poly1305Mac::new(),
        )
    }
}

impl<S: StreamCipher, M: RecordMac> ChaCha20Poly1305Cipher<S, M> {
    /// Derive the key block and assign keys/IVs to this endpoint's directions.
    ///
    /// Errors:
    /// - `Internal` if the negotiated version is below TLS 1.2. Checked before
    ///   the key source is consulted.
    /// - `Internal` if the key block cannot be derived or sliced.
    pub fn new<K: KeyBlockSource + ?Sized>(
        params: &ConnectionParameters,
        key_source: &K,
        mut encrypt_cipher: S,
        mut decrypt_cipher: S,
        write_mac: M,
        read_mac: M,
    ) -> Result<Self, CipherError> {
        let version = params.negotiated_version;
        if !version.is_tls12_or_later() {
            warn!(%version, "ChaCha20-Poly1305 refused for pre-TLS 1.2 connection");
            return Err(CipherError::internal(format!(
                "ChaCha20-Poly1305 requires TLS 1.2 or later, negotiated {version}"
            )));
        }

        let mut key_block = Zeroizing::new([0u8; KEY_BLOCK_LEN]);
        key_source.derive_key_block(&mut key_block[..])?;

        {
            let (client_cipher, server_cipher) = if params.is_server() {
                (&mut decrypt_cipher, &mut encrypt_cipher)
            } else {
                (&mut encrypt_cipher, &mut decrypt_cipher)
            };

            client_cipher.set_key(&key_block[..KEY_LEN_32])?;
            server_cipher.set_key(&key_block[KEY_LEN_32..2 * KEY_LEN_32])?;
        }
        let mut offset = 2 * KEY_LEN_32;

        let client_write_iv = slice_iv(&key_block[..], offset)?;
        offset += FIXED_IV_LEN;
        let server_write_iv = slice_iv(&key_block[..], offset)?;
        offset += FIXED_IV_LEN;

        if offset != KEY_BLOCK_LEN {
            return Err(CipherError::internal(format!(
                "key block slicing consumed {offset} of {KEY_BLOCK_LEN} bytes"
            )));
        }

        let (encrypt_iv, decrypt_iv) = if params.is_server() {
            (server_write_iv, client_write_iv)
        } else {
            (client_write_iv, server_write_iv)
        };

        // Placeholder nonces; every record re-initialises with its own.
        encrypt_cipher.init(&encrypt_iv[..])?;
        decrypt_cipher.init(&decrypt_iv[..])?;

        debug!(role = ?params.role, %version, "installed ChaCha20-Poly1305 record cipher");

        Ok(Self {
            role: params.role,
            encrypt: EncryptHalf {
                cipher: encrypt_cipher,
                mac: write_mac,
                iv: encrypt_iv,
                version,
            },
            decrypt: DecryptHalf {
                cipher: decrypt_cipher,
                mac: read_mac,
                iv: decrypt_iv,
                version,
            },
        })
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn negotiated_version(&self) -> ProtocolVersion {
        self.encrypt.version
    }

    /// Largest plaintext that fits in `ciphertext_limit` bytes of record payload.
    #[inline]
    pub fn plaintext_limit(&self, ciphertext_limit: usize) -> usize {
        plaintext_limit(ciphertext_limit)
    }

    /// Protect one outgoing record. Returns `ciphertext || tag`.
    pub fn encode_plaintext(
        &mut self,
        seq_no: u64,
        content_type: u8,
        plaintext: &[u8],
    ) -> Result<Vec<u8>, CipherError> {
        self.encrypt.encode_plaintext(seq_no, content_type, plaintext)
    }

    /// Verify and decrypt one incoming record payload (`ciphertext || tag`).
    pub fn decode_ciphertext(
        &mut self,
        seq_no: u64,
        content_type: u8,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CipherError> {
        self.decrypt.decode_ciphertext(seq_no, content_type, ciphertext)
    }

    /// Separate the two directions so each can be owned by its own thread.
    pub fn split(self) -> (EncryptHalf<S, M>, DecryptHalf<S, M>) {
        (self.encrypt, self.decrypt)
    }
}

/// `ciphertext_limit - 16`, or 0 when the limit cannot even hold a tag.
#[inline]
pub fn plaintext_limit(ciphertext_limit: usize) -> usize {
    ciphertext_limit.saturating_sub(TAG_LEN)
}

impl<S: StreamCipher, M: RecordMac> EncryptHalf<S, M> {
    pub fn encode_plaintext(
        &mut self,
        seq_no: u64,
        content_type: u8,
        plaintext: &[u8],
    ) -> Result<Vec<u8>, CipherError> {
        let len = u16::try_from(plaintext.len()).map_err(|_| {
            CipherError::internal(format!(
                "plaintext of {} bytes does not fit a record length field",
                plaintext.len()
            ))
        })?;

        let nonce = derive_nonce(seq_no, &self.iv);
        let work = keystream_pass(&mut self.cipher, &mut self.mac, &nonce, plaintext)?;

        let mut output = Vec::with_capacity(plaintext.len() + self.mac.mac_length());
        output.extend_from_slice(&work[KEYSTREAM_PREFIX_LEN..]);
        drop(work);

        let additional_data = build_additional_data(seq_no, content_type, self.version, len);
        let tag = calculate_record_mac(&mut self.mac, &additional_data, &output)?;
        output.extend_from_slice(&tag);

        trace!(
            seq_no,
            content_type = %enum_name_or_hex::<ContentType>(content_type),
            plaintext_len = len,
            "sealed record"
        );
        Ok(output)
    }
}

impl<S: StreamCipher, M: RecordMac> DecryptHalf<S, M> {
    pub fn decode_ciphertext(
        &mut self,
        seq_no: u64,
        content_type: u8,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CipherError> {
        let Some(plaintext_len) = ciphertext.len().checked_sub(TAG_LEN) else {
            warn!(seq_no, len = ciphertext.len(), "record shorter than the Poly1305 tag");
            return Err(CipherError::Decode { len: ciphertext.len() });
        };
        let len = u16::try_from(plaintext_len).map_err(|_| {
            warn!(seq_no, len = ciphertext.len(), "record exceeds the length field");
            CipherError::Decode { len: ciphertext.len() }
        })?;

        let (body, received_tag) = ciphertext.split_at(plaintext_len);

        let nonce = derive_nonce(seq_no, &self.iv);
        let work = keystream_pass(&mut self.cipher, &mut self.mac, &nonce, body)?;

        let additional_data = build_additional_data(seq_no, content_type, self.version, len);
        let expected_tag = calculate_record_mac(&mut self.mac, &additional_data, body)?;

        if !bool::from(expected_tag[..].ct_eq(received_tag)) {
            // `work` holds the unauthenticated plaintext and is wiped on drop.
            warn!(
                seq_no,
                content_type = %enum_name_or_hex::<ContentType>(content_type),
                "record MAC verification failed"
            );
            return Err(CipherError::BadRecordMac);
        }

        trace!(
            seq_no,
            content_type = %enum_name_or_hex::<ContentType>(content_type),
            plaintext_len = len,
            "opened record"
        );
        Ok(work[KEYSTREAM_PREFIX_LEN..].to_vec())
    }
}

/// Run the stream cipher over `zeros(64) || input` for `nonce` and key the MAC
/// with the first 32 bytes of the result.
///
/// Returns the whole work buffer; the payload is at `[KEYSTREAM_PREFIX_LEN..]`.
fn keystream_pass<S: StreamCipher, M: RecordMac>(
    cipher: &mut S,
    mac: &mut M,
    nonce: &[u8],
    input: &[u8],
) -> Result<Zeroizing<Vec<u8>>, CipherError> {
    let mut work = Zeroizing::new(vec![0u8; KEYSTREAM_PREFIX_LEN + input.len()]);
    work[KEYSTREAM_PREFIX_LEN..].copy_from_slice(input);

    cipher.init(nonce)?;
    cipher.apply_keystream(&mut work[..])?;

    mac.set_key(&work[..MAC_KEY_LEN])?;
    Ok(work)
}

fn slice_iv(key_block: &[u8], offset: usize) -> Result<Zeroizing<[u8; FIXED_IV_LEN]>, CipherError> {
    let src = key_block
        .get(offset..offset + FIXED_IV_LEN)
        .ok_or_else(|| CipherError::internal("key block too short for the fixed IVs"))?;

    let mut iv = Zeroizing::new([0u8; FIXED_IV_LEN]);
    iv.copy_from_slice(src);
    Ok(iv)
}
