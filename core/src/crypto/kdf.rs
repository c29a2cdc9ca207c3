//! crypto/kdf.rs
//! Key block derivation for TLS 1.2 record protection.
//!
//! Design:
//! - The record cipher only asks for "N opaque bytes"; where they come from is
//!   behind [`KeyBlockSource`].
//! - [`Tls12Prf`] is the standard source: PRF(master_secret, "key expansion",
//!   server_random + client_random) with P_SHA256 (RFC 5246 §5, §6.3).
//!
//! Security notes:
//! - The master secret is held in a zeroizing buffer and wiped on drop.
//! - Callers must zero the derived key block after slicing it.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::constants::{KEY_EXPANSION_LABEL, MASTER_SECRET_LEN, RANDOM_LEN};
use crate::crypto::types::CipherError;

type HmacSha256 = Hmac<Sha256>;

const SHA256_LEN: usize = 32;

/// Supplier of key block bytes for a connection.
pub trait KeyBlockSource {
    /// Fill `out` entirely with key block material.
    fn derive_key_block(&self, out: &mut [u8]) -> Result<(), CipherError>;
}

/// TLS 1.2 key expansion with the SHA-256 PRF.
pub struct Tls12Prf {
    master_secret: Zeroizing<[u8; MASTER_SECRET_LEN]>,
    client_random: [u8; RANDOM_LEN],
    server_random: [u8; RANDOM_LEN],
}

impl Tls12Prf {
    pub fn new(
        master_secret: &[u8],
        client_random: &[u8; RANDOM_LEN],
        server_random: &[u8; RANDOM_LEN],
    ) -> Result<Self, CipherError> {
        if master_secret.len() != MASTER_SECRET_LEN {
            return Err(CipherError::internal(format!(
                "master secret must be {} bytes, got {}",
                MASTER_SECRET_LEN,
                master_secret.len()
            )));
        }
        let mut secret = Zeroizing::new([0u8; MASTER_SECRET_LEN]);
        secret.copy_from_slice(master_secret);

        Ok(Self {
            master_secret: secret,
            client_random: *client_random,
            server_random: *server_random,
        })
    }
}

impl KeyBlockSource for Tls12Prf {
    fn derive_key_block(&self, out: &mut [u8]) -> Result<(), CipherError> {
        // key_block seed is server_random first, unlike the master secret seed.
        let mut seed = Vec::with_capacity(2 * RANDOM_LEN);
        seed.extend_from_slice(&self.server_random);
        seed.extend_from_slice(&self.client_random);

        prf_sha256(&self.master_secret[..], KEY_EXPANSION_LABEL, &seed, out)
    }
}

/// TLS 1.2 PRF: P_SHA256(secret, label + seed), truncated to `out.len()`.
pub fn prf_sha256(
    secret: &[u8],
    label: &[u8],
    seed: &[u8],
    out: &mut [u8],
) -> Result<(), CipherError> {
    let keyed = || {
        <HmacSha256 as Mac>::new_from_slice(secret)
            .map_err(|_| CipherError::internal("HMAC-SHA256 rejected the PRF secret"))
    };

    // A(1) = HMAC(secret, label + seed)
    let mut a = Zeroizing::new([0u8; SHA256_LEN]);
    {
        let mut mac = keyed()?;
        mac.update(label);
        mac.update(seed);
        a.copy_from_slice(&mac.finalize().into_bytes());
    }

    let mut block = Zeroizing::new([0u8; SHA256_LEN]);
    for chunk in out.chunks_mut(SHA256_LEN) {
        // HMAC(secret, A(i) + label + seed)
        let mut mac = keyed()?;
        mac.update(&a[..]);
        mac.update(label);
        mac.update(seed);
        block.copy_from_slice(&mac.finalize().into_bytes());
        chunk.copy_from_slice(&block[..chunk.len()]);

        // A(i+1) = HMAC(secret, A(i))
        let mut mac = keyed()?;
        mac.update(&a[..]);
        a.copy_from_slice(&mac.finalize().into_bytes());
    }

    Ok(())
}
