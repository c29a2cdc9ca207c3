//! tls-chacha-core
//!
//! ChaCha20-Poly1305 record protection for TLS 1.2 (RFC 7905).
//! Pure Rust, no FFI, no I/O.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Record cipher
pub mod crypto;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::crypto::{
        ChaCha20Poly1305Cipher, ChaCha20Stream, CipherError, ConnectionParameters,
        DecryptHalf, EncryptHalf, KeyBlockSource, Poly1305Mac, RecordMac,
        RustCryptoRecordCipher, StreamCipher, Tls12Prf,
    };
    pub use crate::types::{AlertDescription, ContentType, ProtocolVersion, Role};
}
