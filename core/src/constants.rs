//! constants.rs
//! Registry ids and labels shared by the record cipher.

/// TLS / DTLS protocol version identifiers (wire encoding, big-endian u16).
pub mod version_ids {
    pub const SSL3: u16   = 0x0300;
    pub const TLS10: u16  = 0x0301;
    pub const TLS11: u16  = 0x0302;
    pub const TLS12: u16  = 0x0303;
    pub const TLS13: u16  = 0x0304;
    pub const DTLS10: u16 = 0xFEFF;
    pub const DTLS12: u16 = 0xFEFD;
    pub const DTLS13: u16 = 0xFEFC;
}

/// TLS record content type identifiers.
pub mod content_type_ids {
    pub const CHANGE_CIPHER_SPEC: u8 = 20;
    pub const ALERT: u8              = 21;
    pub const HANDSHAKE: u8          = 22;
    pub const APPLICATION_DATA: u8   = 23;
    pub const HEARTBEAT: u8          = 24;
    pub const TLS12_CID: u8          = 25;
    pub const ACK: u8                = 26;
}

/// PRF label for the TLS 1.2 key block (RFC 5246 §6.3).
pub const KEY_EXPANSION_LABEL: &[u8] = b"key expansion";

/// TLS 1.2 master secret length.
pub const MASTER_SECRET_LEN: usize = 48;

/// ClientHello / ServerHello random length.
pub const RANDOM_LEN: usize = 32;
