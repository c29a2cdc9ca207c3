#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tls_chacha_core::crypto::{ChaCha20Stream, Poly1305Mac, RecordMac, StreamCipher};

    fn unhex(s: &str) -> Vec<u8> {
        hex::decode(s.replace([' ', ':'], "")).unwrap()
    }

    // RFC 8439 §2.5.2
    #[test]
    fn poly1305_rfc8439_vector() {
        let key = unhex(
            "85:d6:be:78:57:55:6d:33:7f:44:52:fe:42:d5:06:a8:\
             01:03:80:8a:fb:0d:b2:fd:4a:bf:f6:af:41:49:f5:1b",
        );
        let tag = unhex("a8:06:1d:c1:30:51:36:c6:c2:2b:8b:af:0c:01:27:a9");

        let mut mac = Poly1305Mac::new();
        mac.set_key(&key).unwrap();
        mac.update(b"Cryptographic Forum Research Group").unwrap();
        assert_eq!(mac.finalize().unwrap().to_vec(), tag);
    }

    #[test]
    fn poly1305_chunked_update_matches_vector() {
        let key = unhex(
            "85d6be7857556d337f4452fe42d506a8\
             0103808afb0db2fd4abff6af4149f51b",
        );
        let msg = b"Cryptographic Forum Research Group";

        let mut mac = Poly1305Mac::new();
        mac.set_key(&key).unwrap();
        for chunk in msg.chunks(3) {
            mac.update(chunk).unwrap();
        }
        assert_eq!(
            mac.finalize().unwrap().to_vec(),
            unhex("a8061dc1305136c6c22b8baf0c0127a9")
        );
    }

    // RFC 8439 §2.4.2: the sunscreen plaintext starts at block counter 1,
    // i.e. right after one 64-byte block of burned keystream.
    #[test]
    fn chacha20_prefix_block_positions_payload_at_counter_one() {
        let key: Vec<u8> = (0u8..32).collect();
        let nonce = unhex("000000000000004a00000000");
        let plaintext = b"Ladies and Gentlemen of the class of '99: If I could offer you only one tip for the future, sunscreen would be it.";

        let mut work = vec![0u8; 64 + plaintext.len()];
        work[64..].copy_from_slice(plaintext);

        let mut stream = ChaCha20Stream::new();
        stream.set_key(&key).unwrap();
        stream.init(&nonce).unwrap();
        stream.apply_keystream(&mut work).unwrap();

        assert_eq!(&work[64..80], &unhex("6e2e359a2568f98041ba0728dd0d6981")[..]);
    }

    #[test]
    fn chacha20_reinit_restarts_keystream() {
        let mut stream = ChaCha20Stream::new();
        stream.set_key(&[9u8; 32]).unwrap();

        stream.init(&[1u8; 12]).unwrap();
        let mut a = [0u8; 100];
        stream.apply_keystream(&mut a).unwrap();

        stream.init(&[1u8; 12]).unwrap();
        let mut b = [0u8; 100];
        stream.apply_keystream(&mut b).unwrap();

        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_poly1305_split_point_irrelevant(
            key in any::<[u8; 32]>(),
            msg in proptest::collection::vec(any::<u8>(), 0..200),
            cut in any::<proptest::sample::Index>(),
        ) {
            let split = cut.index(msg.len() + 1);

            let mut whole = Poly1305Mac::new();
            whole.set_key(&key).unwrap();
            whole.update(&msg).unwrap();

            let mut parts = Poly1305Mac::new();
            parts.set_key(&key).unwrap();
            parts.update(&msg[..split]).unwrap();
            parts.update(&msg[split..]).unwrap();

            prop_assert_eq!(whole.finalize().unwrap(), parts.finalize().unwrap());
        }
    }
}
