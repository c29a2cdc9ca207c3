pub mod types;
pub mod params;
pub mod primitives;
pub mod rustcrypto;
pub mod kdf;
pub mod nonce;
pub mod aad;
pub mod mac;
pub mod cipher;

pub use types::*;
pub use params::*;
pub use primitives::*;
pub use rustcrypto::*;
pub use kdf::*;
pub use nonce::*;
pub use aad::*;
pub use mac::*;
pub use cipher::*;
