#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tls_chacha_core::constants::KEY_EXPANSION_LABEL;
    use tls_chacha_core::crypto::{
        prf_sha256, CipherError, ConnectionParameters, KeyBlockSource, RustCryptoRecordCipher,
        Tls12Prf, KEY_BLOCK_LEN,
    };
    use tls_chacha_core::types::ProtocolVersion;

    // Widely used TLS 1.2 PRF (SHA-256) vector.
    #[test]
    fn prf_sha256_known_answer() {
        let secret = hex::decode("9bbe436ba940f017b17652849a71db35").unwrap();
        let seed = hex::decode("a0ba9f936cda311827a6f796ffd5198c").unwrap();
        let expected = hex::decode(
            "e3f229ba727be17b8d122620557cd453c2aab21d07c3d495329b52d4e61edb5a\
             6b301791e90d35c9c9a46b4e14baf9af0fa022f7077def17abfd3797c0564bab\
             4fbc91666e9def9b97fce34f796789baa48082d122ee42c5a72e5a5110fff701\
             87347b66",
        )
        .unwrap();

        let mut out = vec![0u8; expected.len()];
        prf_sha256(&secret, b"test label", &seed, &mut out).unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn prf_output_is_prefix_stable() {
        let mut short = [0u8; 40];
        let mut long = [0u8; 88];
        prf_sha256(b"secret", b"label", b"seed", &mut short).unwrap();
        prf_sha256(b"secret", b"label", b"seed", &mut long).unwrap();
        assert_eq!(short[..], long[..40]);
    }

    #[test]
    fn key_block_uses_key_expansion_with_server_random_first() {
        let master = [0x11u8; 48];
        let client_random = [0x22u8; 32];
        let server_random = [0x33u8; 32];
        let prf = Tls12Prf::new(&master, &client_random, &server_random).unwrap();

        let mut via_source = [0u8; KEY_BLOCK_LEN];
        prf.derive_key_block(&mut via_source).unwrap();

        let mut seed = Vec::new();
        seed.extend_from_slice(&server_random);
        seed.extend_from_slice(&client_random);
        let mut direct = [0u8; KEY_BLOCK_LEN];
        prf_sha256(&master, KEY_EXPANSION_LABEL, &seed, &mut direct).unwrap();

        assert_eq!(via_source, direct);
    }

    #[test]
    fn master_secret_length_is_checked() {
        let err = Tls12Prf::new(&[0u8; 32], &[0u8; 32], &[0u8; 32]).err().unwrap();
        assert!(matches!(err, CipherError::Internal { .. }));
    }

    #[test]
    fn prf_keyed_peers_interoperate() {
        let prf = Tls12Prf::new(&[0x42u8; 48], &[1u8; 32], &[2u8; 32]).unwrap();

        let mut client = RustCryptoRecordCipher::with_rustcrypto(
            &ConnectionParameters::client(ProtocolVersion::TLSV1_2),
            &prf,
        )
        .unwrap();
        let mut server = RustCryptoRecordCipher::with_rustcrypto(
            &ConnectionParameters::server(ProtocolVersion::TLSV1_2),
            &prf,
        )
        .unwrap();

        let record = client.encode_plaintext(0, 22, b"finished").unwrap();
        assert_eq!(server.decode_ciphertext(0, 22, &record).unwrap(), b"finished");

        let reply = server.encode_plaintext(0, 22, b"finished too").unwrap();
        assert_eq!(client.decode_ciphertext(0, 22, &reply).unwrap(), b"finished too");
    }

    proptest! {
        #[test]
        fn prop_key_block_depends_on_both_randoms(
            client_random in any::<[u8; 32]>(),
            server_random in any::<[u8; 32]>(),
        ) {
            let master = [7u8; 48];
            let a = Tls12Prf::new(&master, &client_random, &server_random).unwrap();
            let b = Tls12Prf::new(&master, &server_random, &client_random).unwrap();

            let mut ka = [0u8; KEY_BLOCK_LEN];
            let mut kb = [0u8; KEY_BLOCK_LEN];
            a.derive_key_block(&mut ka).unwrap();
            b.derive_key_block(&mut kb).unwrap();

            if client_random != server_random {
                prop_assert_ne!(ka, kb);
            } else {
                prop_assert_eq!(ka, kb);
            }
        }
    }
}
